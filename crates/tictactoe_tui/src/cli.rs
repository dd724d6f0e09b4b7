//! Command-line interface for the tic-tac-toe terminal game.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "tictactoe_core=trace")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Resolves the effective configuration: file values, then flags.
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if let Some(log_filter) = &self.log_filter {
            config = config.with_log_filter(log_filter.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        Ok(config)
    }
}
