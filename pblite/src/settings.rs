use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{LaunchError, Result};

/// Font applied to the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: String,
    pub point_size: u32,
    /// CSS-style numeric weight, 400 is normal.
    pub weight: u16,
}

impl FontSpec {
    pub const NORMAL: u16 = 400;
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Open Sans".into(),
            point_size: 8,
            weight: Self::NORMAL,
        }
    }
}

/// Fixed presentation values applied on every `show()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_size: (i32, i32),
    pub font: FontSpec,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Pyblish".into(),
            window_size: (430, 600),
            font: FontSpec::default(),
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join("pblite").join("settings.json"))
}

impl Settings {
    /// Loads settings from the user config directory.
    ///
    /// A missing file yields the defaults. A malformed or out-of-range file
    /// is reported and also yields the defaults.
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("No settings at {}: {e}", path.display());
                return Self::default();
            }
        };

        let parsed = serde_json::from_str::<Settings>(&text)
            .map_err(|e| LaunchError::InvalidSettings(e.to_string()))
            .and_then(|settings| settings.validate().map(|()| settings));

        match parsed {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.window_size;
        if width <= 0 || height <= 0 {
            return Err(LaunchError::InvalidSettings(format!(
                "window size must be positive, got {width}x{height}"
            )));
        }
        if self.font.point_size == 0 {
            return Err(LaunchError::InvalidSettings(
                "font point size must be non-zero".into(),
            ));
        }
        if !(100..=1000).contains(&self.font.weight) {
            return Err(LaunchError::InvalidSettings(format!(
                "font weight {} outside 100..=1000",
                self.font.weight
            )));
        }
        Ok(())
    }
}
