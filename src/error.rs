//! Error types for the logger factory.
//!
//! Building a logger from a boolean never fails; these errors only come from
//! parsing level names and loading settings.

use thiserror::Error;

/// Unified error type for logger configuration.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for logger configuration.
pub type LoggerResult<T> = Result<T, LoggerError>;
