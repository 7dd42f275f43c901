//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ttr_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the rendered feed
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ttr_status::initialization::init_logger_with;
use ttr_status::{run_command, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Lets TTR_API_BASE_URL / TTR_USER_AGENT live in a .env file
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_command(&config, &opt.command).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("ttr_status error: {:#}", e);
            process::exit(1);
        }
    }
}
