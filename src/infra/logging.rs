//! File-backed tracing setup. The terminal belongs to the TUI, so log lines
//! go to `<cache dir>/gacha/gacha.log` instead of stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use crate::config::cache::get_cache_dir;

pub const LOG_ENV_VAR: &str = "GACHA_LOG";
const LOG_FILE_NAME: &str = "gacha.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber and returns the log file path.
pub fn init_logging() -> Result<PathBuf> {
    let path = get_cache_dir()?.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
