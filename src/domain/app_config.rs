use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::Result;
use crate::domain::theme::ThemeConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Destination root used when none is given on the command line
    pub default_destination: Option<PathBuf>,

    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            default_destination: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.theme.validate()
    }
}
