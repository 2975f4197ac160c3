//! Metrics module - gauge family construction and text exposition.

mod metrics_service;

// Re-export the public interface
pub use metrics_service::{encode_gauge_family, generate_metrics};
