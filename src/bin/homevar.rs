//! Homevar CLI Binary
//!
//! Command-line interface for inspecting and patching per-user application settings.

use clap::Parser;
use homevar::cli::{Cli, RunContext};
use homevar::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(app = %cli.app, "Homevar CLI starting");

    let mut context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening config store: {}", e);
            eprintln!("{}", homevar::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", homevar::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args over defaults.
/// Environment variables are applied later by `init_logging` and win over both.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig {
        level: "warn".to_string(),
        ..LoggingConfig::default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
