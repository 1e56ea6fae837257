//! Encoder configuration and its development/production presets.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::level::Level;

/// How the level is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEncoding {
    /// `info`
    Lowercase,
    /// `INFO`
    Capital,
}

impl LevelEncoding {
    pub fn encode(&self, level: Level) -> &'static str {
        match self {
            LevelEncoding::Lowercase => level.as_str(),
            LevelEncoding::Capital => level.as_capital_str(),
        }
    }
}

/// How timestamps are rendered, both for the entry time and time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEncoding {
    /// `2024-05-01T12:30:45.123+02:00`
    Iso8601,
    /// `2024-05-01T12:30:45+02:00`
    Rfc3339,
    /// Floating-point seconds since the Unix epoch.
    EpochSeconds,
    /// Floating-point milliseconds since the Unix epoch.
    EpochMillis,
    /// Integer nanoseconds since the Unix epoch.
    EpochNanos,
}

impl TimeEncoding {
    pub fn encode(&self, time: &DateTime<FixedOffset>) -> serde_json::Value {
        match self {
            TimeEncoding::Iso8601 => time.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string().into(),
            TimeEncoding::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::Secs, false).into(),
            TimeEncoding::EpochSeconds => float(
                time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9,
            ),
            TimeEncoding::EpochMillis => float(
                time.timestamp_millis() as f64
                    + f64::from(time.timestamp_subsec_nanos() % 1_000_000) / 1e6,
            ),
            TimeEncoding::EpochNanos => match time.timestamp_nanos_opt() {
                Some(nanos) => nanos.into(),
                None => time.to_rfc3339().into(),
            },
        }
    }
}

/// How durations are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationEncoding {
    /// Human-readable string such as `1.5s`, `150ms` or `1m30s`.
    String,
    /// Integer nanoseconds.
    Nanos,
    /// Floating-point milliseconds.
    Millis,
    /// Floating-point seconds.
    Seconds,
}

impl DurationEncoding {
    pub fn encode(&self, duration: &Duration) -> serde_json::Value {
        match self {
            DurationEncoding::String => human_duration(duration).into(),
            DurationEncoding::Nanos => u64::try_from(duration.as_nanos())
                .unwrap_or(u64::MAX)
                .into(),
            DurationEncoding::Millis => float(duration.as_secs_f64() * 1e3),
            DurationEncoding::Seconds => float(duration.as_secs_f64()),
        }
    }
}

/// How the call site is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerEncoding {
    /// Last directory and file name: `encoder/json.rs:42`.
    Short,
    /// Path as recorded by the compiler: `src/encoder/json.rs:42`.
    Full,
}

impl CallerEncoding {
    pub fn encode(&self, file: &str, line: u32) -> String {
        match self {
            CallerEncoding::Full => format!("{file}:{line}"),
            CallerEncoding::Short => {
                let normalized = file.replace('\\', "/");
                let mut parts = normalized.rsplitn(3, '/');
                let name = parts.next().unwrap_or_default();
                match parts.next() {
                    Some(dir) => format!("{dir}/{name}:{line}"),
                    None => format!("{name}:{line}"),
                }
            }
        }
    }
}

/// Rules for rendering one log entry.
///
/// A key set to `None` leaves that part out of the entry entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    pub time_key: Option<String>,
    pub level_key: Option<String>,
    pub name_key: Option<String>,
    pub caller_key: Option<String>,
    pub message_key: Option<String>,
    pub stacktrace_key: Option<String>,
    pub line_ending: String,
    pub level_encoding: LevelEncoding,
    pub time_encoding: TimeEncoding,
    pub duration_encoding: DurationEncoding,
    pub caller_encoding: CallerEncoding,
}

impl EncoderConfig {
    /// Verbose, human-oriented preset.
    pub fn development() -> Self {
        Self {
            time_key: Some("T".to_string()),
            level_key: Some("L".to_string()),
            name_key: Some("N".to_string()),
            caller_key: Some("C".to_string()),
            message_key: Some("M".to_string()),
            stacktrace_key: Some("S".to_string()),
            line_ending: "\n".to_string(),
            level_encoding: LevelEncoding::Capital,
            time_encoding: TimeEncoding::Iso8601,
            duration_encoding: DurationEncoding::String,
            caller_encoding: CallerEncoding::Short,
        }
    }

    /// Compact, machine-oriented preset.
    pub fn production() -> Self {
        Self {
            time_key: Some("ts".to_string()),
            level_key: Some("level".to_string()),
            name_key: Some("logger".to_string()),
            caller_key: Some("caller".to_string()),
            message_key: Some("msg".to_string()),
            stacktrace_key: Some("stacktrace".to_string()),
            line_ending: "\n".to_string(),
            level_encoding: LevelEncoding::Lowercase,
            time_encoding: TimeEncoding::EpochSeconds,
            duration_encoding: DurationEncoding::Seconds,
            caller_encoding: CallerEncoding::Short,
        }
    }

    pub fn with_time_encoding(mut self, encoding: TimeEncoding) -> Self {
        self.time_encoding = encoding;
        self
    }

    pub fn with_duration_encoding(mut self, encoding: DurationEncoding) -> Self {
        self.duration_encoding = encoding;
        self
    }

    /// Whether `key` is one of the configured entry keys.
    pub fn is_reserved(&self, key: &str) -> bool {
        [
            &self.time_key,
            &self.level_key,
            &self.name_key,
            &self.caller_key,
            &self.message_key,
            &self.stacktrace_key,
        ]
        .into_iter()
        .any(|k| k.as_deref() == Some(key))
    }
}

/// Renders `d` as hours, minutes and fractional seconds (`1h2m3.5s`).
/// Below one second the unit is ns, µs or ms (`150ms`, `2µs`). Zero is `0s`.
fn human_duration(d: &Duration) -> String {
    if d.is_zero() {
        return "0s".to_string();
    }

    let secs = d.as_secs();
    let nanos = u128::from(d.subsec_nanos());
    if secs == 0 {
        return match nanos {
            n if n < 1_000 => format!("{n}ns"),
            n if n < 1_000_000 => fraction(n, 3, "µs"),
            n => fraction(n, 6, "ms"),
        };
    }

    let (hours, minutes) = (secs / 3600, secs % 3600 / 60);
    let seconds = fraction(u128::from(secs % 60) * 1_000_000_000 + nanos, 9, "s");
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}")
    } else {
        seconds
    }
}

/// `value` scaled down by `10^digits`, trailing zeros trimmed.
fn fraction(value: u128, digits: u32, unit: &str) -> String {
    let scale = 10u128.pow(digits);
    let (whole, rem) = (value / scale, value % scale);
    if rem == 0 {
        return format!("{whole}{unit}");
    }
    let frac = format!("{rem:0width$}", width = digits as usize);
    format!("{whole}.{}{unit}", frac.trim_end_matches('0'))
}

/// JSON numbers cannot hold NaN or infinities.
pub(crate) fn float(v: f64) -> serde_json::Value {
    match serde_json::Number::from_f64(v) {
        Some(n) => serde_json::Value::Number(n),
        None if v.is_nan() => "NaN".into(),
        None if v > 0.0 => "+Inf".into(),
        None => "-Inf".into(),
    }
}
