//! Unified error type hierarchy for Gradebook
//!
//! Provides structured error handling with RosterError, InputError, ConfigError,
//! and the aggregate AppError.

use std::io;
use thiserror::Error;

/// Roster data-operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Student with ID {0} already exists")]
    DuplicateId(i32),

    #[error("Student with ID {0} not found")]
    NotFound(i32),
}

/// Terminal input errors raised by the token reader.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("End of input reached")]
    EndOfInput,

    #[error("Invalid input '{token}': expected {expected}")]
    Malformed {
        token: String,
        expected: &'static str,
    },

    #[error("IO error while reading input: {0}")]
    Io(#[from] io::Error),
}

/// Settings file parsing and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML in settings: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Settings validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error during settings operations: {0}")]
    IoError(#[from] io::Error),
}

/// Global error type for the session and its start-up.
///
/// Provides unified error categorization and user-facing messages.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),

    /// Output stream failure (terminal closed, broken pipe)
    #[error("I/O error: {0}")]
    Io(String),

    /// Logger could not be installed or started
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Get a user-facing error message suitable for terminal display
    pub fn user_message(&self) -> String {
        match self {
            AppError::Roster(e) => format!("Roster operation failed: {}", e),
            AppError::Input(InputError::EndOfInput) => "No more input available".to_string(),
            AppError::Input(e) => format!("Could not read input: {}", e),
            AppError::Config(e) => format!("Could not load settings: {}", e),
            AppError::Io(msg) => format!("Terminal output failed: {}", msg),
            AppError::Logging(msg) => format!("Could not start logging: {}", msg),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_error_display() {
        let err = RosterError::DuplicateId(7);
        assert_eq!(err.to_string(), "Student with ID 7 already exists");
    }

    #[test]
    fn test_malformed_input_display() {
        let err = InputError::Malformed {
            token: "abc".to_string(),
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "Invalid input 'abc': expected an integer");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound("/tmp/settings.toml".to_string());
        assert_eq!(err.to_string(), "Settings file not found: /tmp/settings.toml");
    }

    #[test]
    fn test_app_error_user_message() {
        let err: AppError = RosterError::NotFound(3).into();
        assert_eq!(
            err.user_message(),
            "Roster operation failed: Student with ID 3 not found"
        );

        let eof: AppError = InputError::EndOfInput.into();
        assert_eq!(eof.user_message(), "No more input available");
    }
}
