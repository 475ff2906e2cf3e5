//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All resolution logic is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use whois_lookup::initialization::init_logger_with;
use whois_lookup::{Config, WhoisClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = WhoisClient::new();
    let timeout = Duration::from_secs(config.timeout_seconds);

    match client.lookup_with_timeout(&config.domain, timeout).await {
        Ok(Some(text)) => {
            println!("{text}");
            Ok(())
        }
        Ok(None) => {
            // Conclusive negative from the registry; distinct from a failure
            eprintln!("No match: {} is not registered", config.domain);
            Ok(())
        }
        Err(e) => {
            eprintln!("whois_lookup error: {e}");
            process::exit(1);
        }
    }
}
