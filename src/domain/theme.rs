// ============================================================
// THEME CONFIGURATION
// ============================================================
// Colors, font reference and sizing consumed by the rendering layer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};

/// Color set for one theme variant. Values are `#rrggbb` strings.
///
/// The terminal front end only paints status lines with `accent`;
/// `foreground` and `background` are for graphical renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub foreground: String,
    pub background: String,
    pub accent: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            foreground: "#1e1e1e".to_string(),
            background: "#ffffff".to_string(),
            accent: "#2962ff".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            foreground: "#f0f0f0".to_string(),
            background: "#161616".to_string(),
            accent: "#82b1ff".to_string(),
        }
    }

    fn validate(&self, variant: &str) -> Result<()> {
        for (field, value) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
            ("accent", &self.accent),
        ] {
            if hex_to_rgb(value).is_none() {
                return Err(AppError::ConfigError(format!(
                    "theme.{}.{} must be a #rrggbb color, got {:?}",
                    variant, field, value
                )));
            }
        }
        Ok(())
    }
}

/// Parses `#rrggbb` into its channels.
pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Use the dark palette
    pub dark_mode: bool,

    /// Custom regular font for graphical renderers. The CLI only checks
    /// that it can be read.
    pub font: Option<PathBuf>,

    /// Base text size in points for graphical renderers (default: 14)
    pub text_size: f32,

    /// Minimum preview column width in characters (default: 8)
    pub min_column_width: usize,

    /// Extra width added to the widest cell of a column (default: 2)
    pub column_padding: usize,

    pub light: Palette,
    pub dark: Palette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font: None,
            text_size: 14.0,
            min_column_width: 8,
            column_padding: 2,
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl ThemeConfig {
    /// Palette for the active variant.
    pub fn palette(&self) -> &Palette {
        if self.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Reads the configured font file. `Ok(None)` when no font is configured.
    pub fn load_font(&self) -> Result<Option<Vec<u8>>> {
        let Some(path) = &self.font else {
            return Ok(None);
        };
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to load font {}: {}", path.display(), e))
        })?;
        Ok(Some(bytes))
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_column_width == 0 {
            return Err(AppError::ConfigError(
                "min_column_width must be > 0".to_string(),
            ));
        }
        if !(self.text_size > 0.0) {
            return Err(AppError::ConfigError("text_size must be > 0".to_string()));
        }
        self.light.validate("light")?;
        self.dark.validate("dark")
    }
}
