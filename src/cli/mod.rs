//! Command-line interface definitions.

pub mod check;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bagwatch - crypto portfolio gain alerting.
#[derive(Parser, Debug)]
#[command(name = "bagwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one valuation-and-alert cycle
    Run(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `bagwatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and ledger without fetching quotes
    Config(ConfigPathArg),
    /// Send a Telegram test message
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}
