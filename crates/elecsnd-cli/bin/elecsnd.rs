//! elecsnd binary entry point.
//!
//! Parses command-line arguments, initializes logging and runs the command.

use anyhow::Result;
use elecsnd_cli::{CliConfig, commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_args();
    tracing::debug!("Configuration loaded: {:?}", config);

    commands::run(config)
}
