use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::app::config::AppConfig;
use crate::app::ports::config_store::{ConfigError, ConfigStore};
use crate::config::cache::APP_DIR_NAME;
use crate::config::config_file::GachaConfigFile;

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
    /// Set for paths given on the command line: a missing file is an error
    /// there, while the default location may simply not exist yet.
    required: bool,
}

impl TomlConfigStore {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = get_config_dir()?;
        Ok(Self::with_config_dir(config_dir))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join(CONFIG_FILE_NAME),
            required: false,
        }
    }

    pub fn with_file(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.required && !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", self.path.display())))?;

        let config = GachaConfigFile::parse(&content)?.to_app_config();
        debug!(path = %self.path.display(), ?config, "config loaded");
        Ok(config)
    }

    fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_base.join(APP_DIR_NAME))
}
