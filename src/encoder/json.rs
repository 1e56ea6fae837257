//! JSON encoder: one object per line.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value as Json};

use super::config::{float, EncoderConfig};
use crate::field::{Field, Value};
use crate::level::Level;
use crate::logger::Caller;

/// Prefix for fields that collide with an entry key.
pub const FIELD_PREFIX: &str = "fields.";

/// Everything about an entry except its fields.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub level: Level,
    pub time: DateTime<FixedOffset>,
    pub name: Option<&'a str>,
    pub caller: Option<Caller>,
    pub message: &'a str,
    pub stacktrace: Option<String>,
}

/// Renders entries as single-line JSON objects according to an
/// [`EncoderConfig`].
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    config: EncoderConfig,
}

impl JsonEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode an entry, its logger context and its call-site fields.
    ///
    /// Keys appear in the order level, time, name, caller, message, context,
    /// fields, stacktrace. A field whose key is one of the configured entry
    /// keys is written as `fields.<key>` so it never replaces the entry's own
    /// value. Otherwise a repeated key keeps its first position and its last
    /// value.
    pub fn encode(&self, entry: &Entry<'_>, context: &[Field], fields: &[Field]) -> String {
        let cfg = &self.config;
        let mut obj = Map::new();

        if let Some(key) = &cfg.level_key {
            obj.insert(key.clone(), cfg.level_encoding.encode(entry.level).into());
        }
        if let Some(key) = &cfg.time_key {
            obj.insert(key.clone(), cfg.time_encoding.encode(&entry.time));
        }
        if let (Some(key), Some(name)) = (&cfg.name_key, entry.name) {
            obj.insert(key.clone(), name.into());
        }
        if let (Some(key), Some(caller)) = (&cfg.caller_key, &entry.caller) {
            obj.insert(
                key.clone(),
                cfg.caller_encoding.encode(caller.file, caller.line).into(),
            );
        }
        if let Some(key) = &cfg.message_key {
            obj.insert(key.clone(), entry.message.into());
        }
        for field in context.iter().chain(fields) {
            let key = if cfg.is_reserved(&field.key) {
                format!("{FIELD_PREFIX}{}", field.key)
            } else {
                field.key.to_string()
            };
            obj.insert(key, self.encode_value(&field.value));
        }
        if let (Some(key), Some(stack)) = (&cfg.stacktrace_key, &entry.stacktrace) {
            obj.insert(key.clone(), stack.as_str().into());
        }

        let mut line = Json::Object(obj).to_string();
        line.push_str(&cfg.line_ending);
        line
    }

    fn encode_value(&self, value: &Value) -> Json {
        match value {
            Value::Bool(v) => (*v).into(),
            Value::I64(v) => (*v).into(),
            Value::U64(v) => (*v).into(),
            Value::F64(v) => float(*v),
            Value::Str(v) => v.as_str().into(),
            Value::Duration(d) => self.config.duration_encoding.encode(d),
            Value::Time(t) => self.config.time_encoding.encode(t),
            Value::Json(v) => v.clone(),
        }
    }
}
