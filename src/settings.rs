//! Editor settings - creation defaults loaded from a JSON file.
//!
//! The file lives at `<config_dir>/barplan/settings.json`. Every field is
//! optional; missing fields fall back to the built-in defaults.

use crate::constants::{
    DEFAULT_ROOM_POSITION, DEFAULT_ROOM_SIZE, DEFAULT_TABLE_POSITION, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME, TABLE_SIZE,
};
use crate::types::SeatCount;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Size of rooms created with "add room" (width, height)
    pub room_size: (f32, f32),
    /// Top-left position of rooms created with "add room"
    pub room_position: (f32, f32),
    /// Top-left position of tables created with "add table"
    pub table_position: (f32, f32),
    /// Seat count given to new tables
    pub default_seats: SeatCount,
    /// Edge length of the table marker, used for hit testing
    pub table_size: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            room_size: DEFAULT_ROOM_SIZE,
            room_position: DEFAULT_ROOM_POSITION,
            table_position: DEFAULT_TABLE_POSITION,
            default_seats: SeatCount::default(),
            table_size: TABLE_SIZE,
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject sizes that would produce degenerate entities.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = self.room_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(SettingsError::Invalid {
                field: "room_size",
                reason: format!("extents must be positive, got {}x{}", width, height),
            });
        }
        if !(self.table_size > 0.0) {
            return Err(SettingsError::Invalid {
                field: "table_size",
                reason: format!("must be positive, got {}", self.table_size),
            });
        }
        Ok(())
    }
}
