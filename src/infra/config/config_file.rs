use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::config::AppConfig;
use crate::app::ports::ConfigError;
use crate::app::spinner::{DEFAULT_DURATION, DEFAULT_FRAME_RATE, SpinnerConfig};

/// On-disk shape of `config.toml`. Every table and key is optional.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GachaConfigFile {
    pub spinner: SpinnerSection,
    pub random: RandomSection,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerSection {
    pub frame_rate: u32,
    pub duration_ms: u64,
}

impl Default for SpinnerSection {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomSection {
    pub seed: Option<u32>,
}

impl GachaConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if file.spinner.frame_rate == 0 {
            return Err(ConfigError::Parse(
                "spinner.frame_rate must be at least 1".to_string(),
            ));
        }
        Ok(file)
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            spinner: SpinnerConfig {
                frame_rate: self.spinner.frame_rate,
                duration: Duration::from_millis(self.spinner.duration_ms),
            },
            seed: self.random.seed,
        }
    }
}
