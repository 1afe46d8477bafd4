//! Run settings
//!
//! Loaded from a JSON file by the headless runner. Every field is optional in
//! the file; omitted fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::ConfigError;
use crate::sim::Extent;
use crate::tuning::Tuning;

/// Run settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display surface width (pixels)
    pub width: f32,
    /// Display surface height (pixels)
    pub height: f32,
    /// RNG seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    /// Frame rate the headless clock simulates
    pub target_fps: u32,
    /// Draw the HP bar, weapon and score labels
    pub show_hud: bool,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            seed: None,
            target_fps: 60,
            show_hud: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = self.to_json().map_err(|source| ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from a JSON string (no validation)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::tuning("target_fps", 0.0, "must be > 0"));
        }
        self.tuning.validate()
    }

    /// Display extent described by these settings
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Seconds per frame at the target frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}
