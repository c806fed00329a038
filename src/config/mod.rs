//! Configuration module for Gradebook settings.
//!
//! Settings only tune the ambient behaviour of the program (logging). They
//! never change how the roster or the menu behave.
//!
//! # Module Structure
//!
//! - `loader`: Locates, reads and writes the TOML settings file
//! - `validator`: Checks settings before they are applied
//!
//! # Settings Management
//!
//! `SettingsManager::load()` reads `~/.config/gradebook/settings.toml`.
//! A missing file means defaults; a file that cannot be parsed also falls
//! back to defaults, with a warning on stderr because the logger is not yet
//! installed at that point.

pub mod loader;
pub mod validator;

use crate::error::ConfigError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Install the file logger at start-up
    pub enabled: bool,
    /// One of off, error, warn, info, debug, trace
    pub level: String,
    /// Directory receiving session log files
    pub directory: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            enabled: false,
            level: "info".to_string(),
            directory: "logs".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Parsed level; falls back to `Info` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }
}

/// Application settings loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub logging: LoggingSettings,
}

/// Loads `AppSettings` from the global settings path.
pub struct SettingsManager;

impl SettingsManager {
    /// Load settings from the global path, or return defaults if the file doesn't exist.
    ///
    /// A file that fails to parse or validate is reported on stderr and
    /// replaced by defaults.
    pub fn load() -> Result<AppSettings, ConfigError> {
        let path = loader::get_global_settings_path()?;
        Ok(Self::load_or_default(&path))
    }

    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> AppSettings {
        if !path.exists() {
            return AppSettings::default();
        }

        match loader::load_settings_from_file(path)
            .and_then(|settings| validator::validate_settings(&settings).map(|()| settings))
        {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!(
                    "[Config] [WARNING] Ignoring {}, falling back to defaults: {}",
                    path.display(),
                    e
                );
                AppSettings::default()
            }
        }
    }
}
