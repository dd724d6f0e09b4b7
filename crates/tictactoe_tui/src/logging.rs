//! Tracing setup.

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
