//! File logging.
//!
//! The TUI owns stdout, so log lines go to `walletbar.log` in the data
//! directory. The filter comes from `WALLETBAR_LOG` (same syntax as
//! `RUST_LOG`), defaulting to `walletbar=info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use crate::state::platform::AppPaths;

/// Install the global subscriber. Returns the log file path.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(paths: &AppPaths) -> Result<PathBuf> {
    let path = paths.log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter())
        .try_init()
        .map_err(|e| eyre!("Failed to initialise logging: {e}"))?;

    Ok(path)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
