//! Gradebook
//!
//! An interactive console utility for recording student grades (a test score
//! out of 80 and an assignment score out of 20), computing class statistics and
//! presenting ranked and bucketed views. Everything lives in memory for the
//! duration of one session.
//!
//! The crate is organized into functional modules:
//! - **error**: Unified error type hierarchy
//! - **models**: Student record, menu choices and the grade histogram
//! - **roster**: The ordered in-memory roster and its data operations
//! - **report**: Terminal rendering of every report
//! - **input**: Whitespace token reader for terminal input
//! - **session**: The interactive menu loop
//! - **config**: TOML settings loading and validation
//! - **log_collector**: File-backed `log` backend

// Core foundational modules
pub mod error;
pub mod models;

// Data operations and their presentation
pub mod roster;
pub mod report;

// Terminal interaction
pub mod input;
pub mod session;

// Ambient services
pub mod config;
pub mod log_collector;

// Re-export the log crate for macro usage
pub use log;

// ============================================================================
// PUBLIC RE-EXPORTS FOR CONVENIENCE
// ============================================================================

pub use error::{AppError, ConfigError, InputError, RosterError};

pub use models::{GradeHistogram, GradeRange, MenuChoice, Student};

pub use roster::Roster;

pub use session::{Flow, Session};

pub use config::{AppSettings, SettingsManager};

pub use log_collector::{LogCollector, LogLine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
