//! Core error types for the exporter.
//!
//! Per-cell problems (an unknown column label, an unparsable number) are
//! not errors at this level: they are logged where they occur and recovered
//! locally. Only conditions a caller has to act on live here.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exporter.
#[derive(Error, Debug)]
pub enum Error {
    /// A scraped row could not be converted into a typed asset.
    /// Recoverable per record: the row is skipped and the batch continues.
    #[error("Failed to convert record to asset: {0}")]
    Conversion(String),

    /// The whole document yielded no assets. Fatal to the run.
    #[error("Found no assets in the portfolio document")]
    EmptyPortfolio,

    /// Rendering the exposition text failed.
    #[error("Failed to encode metrics exposition: {0}")]
    Exposition(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
