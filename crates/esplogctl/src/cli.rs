//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// esplogctl CLI
#[derive(Parser)]
#[command(name = "esplogctl")]
#[command(about = "Set ESP-IDF log levels over MQTT with automatic tag discovery", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Additional scan root, relative to the working directory (repeatable)
    #[arg(long = "scan-root", global = true, value_name = "DIR")]
    pub scan_root: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan the source tree and print the discovered log tags
    List {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Publish a log-level command for one tag (or all tags)
    Set(SetArgs),
}

#[derive(Args)]
pub struct SetArgs {
    /// Log tag (e.g. mqtt_cmd, or * for all tags)
    #[arg(long)]
    pub tag: Option<String>,

    /// Shortcut for --tag '*'
    #[arg(long)]
    pub all: bool,

    /// Level: NONE|ERROR|WARN|INFO|DEBUG|VERBOSE or 0..5
    #[arg(long)]
    pub level: Option<String>,

    /// Broker hostname (default: $MQTT_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Broker port (default: $MQTT_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Broker user (default: $MQTT_USER)
    #[arg(long)]
    pub user: Option<String>,

    /// Delivery QoS (default: $MQTT_QOS)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub qos: Option<u8>,

    /// Topic root the device listens under (default: $TOPIC_ROOT)
    #[arg(long = "topic-root")]
    pub topic_root: Option<String>,

    /// Password file (default: $MQTT_PASS_FILE)
    #[arg(long = "pass-file", value_name = "FILE")]
    pub pass_file: Option<PathBuf>,

    /// Print the command without invoking mosquitto_pub
    #[arg(long)]
    pub dry_run: bool,
}
