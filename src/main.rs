//! Highlight Reel CLI
//!
//! Builds a short highlight reel from one video: a clip is cut at each
//! requested percentage of the running time, faded in, and all clips are
//! joined into `output.mp4`.
//!
//! # Usage
//!
//! ```bash
//! highlight movie.mp4
//! highlight movie.mp4 --offsets 5 25 50 75 --duration 6
//! ```
//!
//! # Exit codes
//!
//! - 0: success
//! - 1: configuration error
//! - 2: invalid arguments
//! - 3: duration probe failed
//! - 4: clip extraction failed
//! - 5: manifest could not be written
//! - 6: merge failed

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use highlight_reel::adapters::tracing_log::init_tracing;
use highlight_reel::app::{AppContainer, DefaultAppContainer};
use highlight_reel::cli::Cli;
use highlight_reel::config_initialization::initialize_configuration;
use highlight_reel::error::ConfigError;

/// Exit code for requests that parse but fail validation
const USAGE_EXIT_CODE: u8 = 2;

/// Main entry point for the highlight CLI
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match initialize_configuration(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            return ExitCode::from(ConfigError::EXIT_CODE);
        }
    };
    init_tracing(&config.logging);
    match &config.source_file {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
    if config.env_overrides > 0 {
        debug!("Applied {} environment variable overrides", config.env_overrides);
    }

    let request = match cli.to_request().context("Invalid request") {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match run(&config, &request).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Execute the pipeline and report the outcome to the user
async fn run(
    config: &highlight_reel::AppConfig,
    request: &highlight_reel::RunRequest,
) -> Result<(), u8> {
    info!("Starting highlight reel builder");
    let container = DefaultAppContainer::new(config);
    let result = container.highlight_interactor().run(request).await;

    for warning in &result.cleanup.warnings {
        if !warning.is_not_found() {
            eprintln!("Warning: {}", warning);
        }
    }

    match &result.outcome {
        Ok(output) => {
            println!("Output video saved as: {}", output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error ({} stage): {}", e.stage(), e);
            Err(e.exit_code())
        }
    }
}
