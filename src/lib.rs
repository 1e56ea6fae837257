//! Log Factory - structured JSON loggers with development and production presets.
//!
//! [`build_logger`] picks the development or production encoder preset,
//! fixes timestamps to ISO-8601 and durations to human-readable strings, and
//! returns a [`Logger`] that writes one JSON object per line.

pub mod bridge;
pub mod config;
pub mod encoder;
pub mod error;
pub mod factory;
pub mod field;
pub mod level;
pub mod logger;
pub mod logging;
pub mod sampling;

#[cfg(test)]
mod testing;

pub use crate::bridge::LoggerLayer;
pub use crate::config::LoggingConfig;
pub use crate::error::{LoggerError, LoggerResult};
pub use crate::factory::{build_logger, build_logger_with_writer};
pub use crate::field::{Field, Value};
pub use crate::level::Level;
pub use crate::logger::{new_logger, Caller, Logger, LoggerOptions, Record};
