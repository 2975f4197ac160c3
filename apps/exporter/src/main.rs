mod config;

use std::fs;

use anyhow::Context;
use log::{debug, info};
use mfexporter_core::metrics::generate_metrics;
use mfexporter_core::{extract_assets, Error};

use crate::config::{Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_env()?;

    let html = fs::read_to_string(&config.portfolio_html)
        .with_context(|| format!("failed to read {}", config.portfolio_html.display()))?;
    debug!("Read {} bytes of portfolio html", html.len());

    let portfolio = extract_assets(&html);
    if portfolio.is_empty() {
        return Err(Error::EmptyPortfolio.into());
    }
    info!("Extracted {} assets", portfolio.len());

    let output = match config.output_format {
        OutputFormat::Metrics => generate_metrics(&portfolio)?,
        OutputFormat::Json => serde_json::to_string_pretty(&portfolio)?,
    };
    println!("{output}");

    Ok(())
}
