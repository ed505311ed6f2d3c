//! esplogctl - operator CLI for remote ESP-IDF log-level control.
//!
//! Scans the firmware sources for log tags and publishes
//! `<tag>=<LEVEL>` commands over MQTT for the device to apply.

mod cli;
mod commands;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use esplog_common::{Error, ToolConfig};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout stays clean for tag listings.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ToolConfig::from_env();

    let result = match &cli.command {
        Commands::List { json } => commands::list(&cli.scan_root, *json),
        Commands::Set(args) => commands::set(&config, &cli.scan_root, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code as u8)
        }
    }
}
