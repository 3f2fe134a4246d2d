//! Command-line interface definitions.
//!
//! Defines the CLI structure for ltcwatch using `clap`. Without a subcommand
//! the watcher runs in the foreground.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Litecoin address watcher with webhook alerts and chat commands
#[derive(Parser, Debug)]
#[command(name = "ltcwatch")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to execute, `run` when none was given.
    #[must_use]
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

/// Top-level subcommands for the ltcwatch CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Watch the address and answer chat commands (default)
    Run,

    /// Print the wallet balance and its USD value
    Balance,

    /// Print the most recent transactions
    Transactions {
        /// Number of transactions to list (capped by commands.max_transactions)
        count: Option<usize>,
    },

    /// Validate the configuration and print a summary
    Check,
}
