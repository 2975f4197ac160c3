use std::path::PathBuf;

use mfexporter_core::errors::{Error, Result};

/// Output renderings supported by the exporter binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Metrics,
    Json,
}

pub struct Config {
    pub portfolio_html: PathBuf,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let portfolio_html: PathBuf = std::env::var("MF_PORTFOLIO_HTML")
            .map_err(|_| Error::MissingConfigKey("MF_PORTFOLIO_HTML".to_string()))?
            .into();

        let output_format = match std::env::var("MF_OUTPUT_FORMAT")
            .unwrap_or_else(|_| "metrics".to_string())
            .as_str()
        {
            "metrics" => OutputFormat::Metrics,
            "json" => OutputFormat::Json,
            other => {
                return Err(Error::InvalidConfigValue(format!(
                    "MF_OUTPUT_FORMAT: {other}"
                )))
            }
        };

        Ok(Self {
            portfolio_html,
            output_format,
        })
    }
}
