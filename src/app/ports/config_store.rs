use std::path::PathBuf;

use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Read error: {0}")]
    Read(String),
    #[error("Invalid config: {0}")]
    Parse(String),
    #[error("No config directory available on this platform")]
    NoConfigDir,
}

pub trait ConfigStore: Send + Sync {
    /// Missing file yields `AppConfig::default()`.
    fn load(&self) -> Result<AppConfig, ConfigError>;

    fn storage_path(&self) -> PathBuf;
}
