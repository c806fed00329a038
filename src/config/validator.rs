//! Settings validation.

use super::{AppSettings, LoggingSettings};
use crate::error::ConfigError;
use log::LevelFilter;

/// Validate the logging level name.
pub fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    level.parse::<LevelFilter>().map(|_| ()).map_err(|_| {
        ConfigError::ValidationFailed(format!(
            "Unknown log level '{}', expected one of off, error, warn, info, debug, trace",
            level
        ))
    })
}

/// Validate logging settings.
pub fn validate_logging(logging: &LoggingSettings) -> Result<(), ConfigError> {
    validate_log_level(&logging.level)?;

    if logging.enabled && logging.directory.trim().is_empty() {
        return Err(ConfigError::ValidationFailed(
            "Log directory cannot be empty when logging is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validate all settings.
pub fn validate_settings(settings: &AppSettings) -> Result<(), ConfigError> {
    validate_logging(&settings.logging)
}
