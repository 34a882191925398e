//! Repohash CLI Binary
//!
//! Command-line interface for generating and verifying repository manifests.

use clap::Parser;
use repohash::cli::{Cli, RunContext};
use repohash::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Configuration comes first: it also carries the logging settings
    let context = match RunContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", repohash::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = logging_config.validate() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Repohash CLI starting");

    match context.execute(&cli.resolved_command()) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if !outcome.success {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", repohash::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args on top of the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, loaded: &LoggingConfig) -> LoggingConfig {
    let mut config = loaded.clone();

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
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
