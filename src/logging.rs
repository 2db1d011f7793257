//! File logging
//!
//! The terminal belongs to the TUI, so tracing output goes to a log file next
//! to the config. `BANKING_API_LOG` takes an env-filter directive (default `info`).

use crate::config::Config;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BANKING_API_LOG";
const LOG_FILE: &str = "banking-api-tui.log";

pub fn log_path() -> Result<PathBuf> {
    Ok(Config::app_dir()?.join(LOG_FILE))
}

/// Install the global subscriber. Returns the file being written to.
pub fn init() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}
