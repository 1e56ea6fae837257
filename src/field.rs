//! Typed key-value fields attached to log entries.

use std::borrow::Cow;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone};

/// A typed field value.
///
/// Durations and timestamps keep their type so the encoder can render them
/// according to its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Duration(Duration),
    Time(DateTime<FixedOffset>),
    Json(serde_json::Value),
}

/// A single key-value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Field named `error` holding the display form of `err`.
    pub fn error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new("error", err.to_string())
    }
}

macro_rules! impl_from {
    ($variant:ident, $conv:ty => $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(<$conv>::from(v))
                }
            }
        )+
    };
}

impl_from!(I64, i64 => i8, i16, i32, i64);
impl_from!(U64, u64 => u8, u16, u32, u64);
impl_from!(F64, f64 => f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::U64(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::I64(v as i64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Time(v.fixed_offset())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}
