mod config;
mod dataset;
mod errors;
mod labeling;
mod models;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting labeler v{}", env!("CARGO_PKG_VERSION"));
    info!(
        catalog = %config.catalog_path.display(),
        seed = %config.seed_path.display(),
        min_score = config.min_score,
        out = %config.out_path.display(),
        "configuration resolved"
    );

    let summary = pipeline::run(&config)?;
    info!(summary = %serde_json::to_string(&summary)?, "run complete");

    Ok(())
}
