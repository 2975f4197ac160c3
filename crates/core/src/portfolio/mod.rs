//! Portfolio module - document walking and asset extraction.

mod portfolio_service;


// Re-export the public interface
pub use portfolio_service::{export_portfolio, extract_assets};
