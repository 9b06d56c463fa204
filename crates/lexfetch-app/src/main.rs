use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lexfetch_config::Config;
use lexfetch_core::{OxfordClient, Resolver};
use tracing_subscriber::EnvFilter;

pub mod backup;
pub mod runner;

#[cfg(test)]
mod tests;

/// Fetch dictionary definitions for a list of words.
#[derive(Parser)]
#[command(name = "lexfetch")]
struct Cli {
    /// Word list to process (overrides LEXFETCH_IN_FILE)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Success output file (overrides LEXFETCH_OUT_FILE)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Dead letter queue file (overrides LEXFETCH_ERROR_FILE)
    #[arg(long)]
    error_file: Option<PathBuf>,

    /// Seconds to wait before each API call (overrides LEXFETCH_THROTTLE_SECS)
    #[arg(long)]
    throttle_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(input) = cli.input {
        config.in_file = input;
    }
    if let Some(output) = cli.output {
        config.out_file = output;
    }
    if let Some(error_file) = cli.error_file {
        config.error_file = error_file;
    }
    if let Some(throttle_secs) = cli.throttle_secs {
        config.throttle_secs = throttle_secs;
    }

    tracing::info!("Starting to process data");

    backup::backup_previous(&config)?;

    let resolver = Resolver::new(OxfordClient::new(&config));
    runner::run(&config, &resolver).await?;

    tracing::info!("Exiting program");
    Ok(())
}
