use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::app_config::AppConfig;
use crate::domain::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "folder-creator.toml";
pub const ENV_PREFIX: &str = "FOLDER_CREATOR_";

/// Layers defaults, an optional TOML file and `FOLDER_CREATOR_*` env vars.
pub struct ConfigService {
    config_file: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: path.into(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self.figment().extract()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
