//! The structured logging interface and its JSON implementation.
//!
//! Callers depend on the [`Logger`] trait only. The concrete logger behind
//! it is private and produced by [`new_logger`].

mod json;
mod options;

pub use json::new_logger;
pub use options::*;

use std::error::Error;
use std::panic::Location;

use crate::field::Field;
use crate::level::Level;

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// One log call, before it is filtered and encoded.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub fields: &'a [Field],
    pub caller: Option<Caller>,
}

/// Leveled emission with key-value context.
///
/// The leveled helpers record their call site as the caller.
pub trait Logger: Send + Sync {
    /// Whether entries at `level` would be written.
    fn enabled(&self, level: Level) -> bool;

    /// Emit a record.
    fn log(&self, record: &Record<'_>);

    /// A logger that adds `fields` to every entry.
    fn with_values(&self, fields: Vec<Field>) -> Box<dyn Logger>;

    /// A logger with `name` appended to this logger's name, dot-separated.
    fn with_name(&self, name: &str) -> Box<dyn Logger>;

    #[track_caller]
    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(&here(Level::Debug, message, fields));
    }

    #[track_caller]
    fn info(&self, message: &str, fields: &[Field]) {
        self.log(&here(Level::Info, message, fields));
    }

    #[track_caller]
    fn warn(&self, message: &str, fields: &[Field]) {
        self.log(&here(Level::Warn, message, fields));
    }

    #[track_caller]
    fn error(&self, message: &str, fields: &[Field]) {
        self.log(&here(Level::Error, message, fields));
    }

    /// Error entry with an `error` field taken from `err`.
    #[track_caller]
    fn error_with(&self, err: &(dyn Error + 'static), message: &str, fields: &[Field]) {
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(Field::error(err));
        all.extend_from_slice(fields);
        self.log(&here(Level::Error, message, &all));
    }
}

#[track_caller]
fn here<'a>(level: Level, message: &'a str, fields: &'a [Field]) -> Record<'a> {
    Record {
        level,
        message,
        fields,
        caller: Some(Location::caller().into()),
    }
}
