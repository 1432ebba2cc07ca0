//! CLI module - Command-line interface for CyberLynX
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CyberLynX - account and target registry API
#[derive(Parser, Debug)]
#[command(name = "cyberlynx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file. Overrides the default search path.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create a default config file
    Init,

    /// Load and validate the config, then print it
    CheckConfig,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["cyberlynx"]);
        assert_eq!(cli.command(), Commands::Serve);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::parse_from(["cyberlynx", "--config", "/tmp/c.toml", "check-config"]);
        assert_eq!(cli.command(), Commands::CheckConfig);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));

        let cli = Cli::parse_from(["cyberlynx", "daemon"]);
        assert_eq!(cli.command(), Commands::Serve);
    }
}
