//! Application settings, stored as TOML.
//!
//! Every field has a default, so a partial or empty file is valid:
//!
//! ```toml
//! roll_capacity = 24
//!
//! [overlay]
//! marker_radius = 18.0
//! ```

pub mod defaults;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact_sheet::ContactSheetConfig;
use crate::overlay::OverlayStyle;
use crate::session::SessionConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Exposures per film roll.
    pub roll_capacity: u32,
    /// JPEG quality for cropped captures (1-100).
    pub capture_quality: u8,
    pub overlay: OverlayStyle,
    pub contact_sheet: ContactSheetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roll_capacity: defaults::ROLL_CAPACITY,
            capture_quality: defaults::CAPTURE_JPEG_QUALITY,
            overlay: OverlayStyle::default(),
            contact_sheet: ContactSheetConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            roll_capacity: self.roll_capacity,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.roll_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "roll_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(1..=100).contains(&self.capture_quality) {
            return Err(ConfigError::Invalid {
                field: "capture_quality",
                reason: format!("{} is outside 1-100", self.capture_quality),
            });
        }
        let overlay = &self.overlay;
        let widths = [
            overlay.frame_width,
            overlay.grid_width,
            overlay.guide_width,
            overlay.marker_radius,
        ];
        if widths.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Invalid {
                field: "overlay",
                reason: "stroke widths and marker radius must be non-negative".to_string(),
            });
        }
        self.contact_sheet.validate()
    }
}
