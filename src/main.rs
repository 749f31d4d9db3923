//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_features` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phish_features::initialization::init_logger_with;
use phish_features::{run_extraction, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env (e.g. RUST_LOG); a missing file is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Features may go to stdout, so the summary goes to stderr
    match run_extraction(config).await {
        Ok(report) => {
            eprintln!(
                "Extracted features for {} URL{} ({} lookups ok, {} failed, {} skipped) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.lookups_succeeded,
                report.lookups_failed,
                report.lookups_skipped,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("phish_features error: {:#}", e);
            process::exit(1);
        }
    }
}
