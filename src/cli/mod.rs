//! CLI module - Command-line interface for Comic Stream
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// Comic Stream - REST backend for a comic/video streaming catalog
#[derive(Parser)]
#[command(name = "comicstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve,

    /// Insert the demo catalog if no series exist
    Seed,

    /// List stored series
    #[command(alias = "ls")]
    List {
        /// Maximum number of series to show
        #[arg(default_value = "20")]
        limit: u64,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["comicstream"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_takes_optional_limit() {
        let cli = Cli::try_parse_from(["comicstream", "ls", "5"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { limit: 5 }));

        let cli = Cli::try_parse_from(["comicstream", "list"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List { limit: 20 }));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["comicstream", "delete"]).is_err());
    }
}
