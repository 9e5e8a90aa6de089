//! Command-line interface definitions.
//!
//! Defines the CLI structure for the `bookingd` binary using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Booking service with a read-through cache and background expiry
#[derive(Parser, Debug)]
#[command(name = "bookingd")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the `bookingd` CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Commands {
    /// Run the booking service until Ctrl-C (default)
    #[default]
    Run,

    /// Validate the configuration and print a summary
    Check,

    /// Print the configured demo bookings as JSON
    List(ListArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct ListArgs {
    /// Sort key: id, price or date (anything else sorts by id)
    #[arg(long)]
    pub sort: Option<String>,

    /// Only bookings priced above the high-value threshold
    #[arg(long)]
    pub high_value: bool,
}

impl Cli {
    /// The subcommand to execute, defaulting to `run`.
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}
