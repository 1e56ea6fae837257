//! JSON logger core.

use std::backtrace::Backtrace;
use std::io::Write;
use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

use super::{Logger, LoggerOptions, Record};
use crate::encoder::{Entry, JsonEncoder};
use crate::field::Field;
use crate::level::Level;
use crate::sampling::Sampler;

/// State shared by a logger and everything derived from it.
struct Core {
    encoder: JsonEncoder,
    writer: BoxMakeWriter,
    level: Level,
    stacktrace_level: Level,
    add_caller: bool,
    sampler: Option<Sampler>,
}

struct JsonLogger {
    core: Arc<Core>,
    name: Option<String>,
    context: Vec<Field>,
}

/// Construct a logger from options.
///
/// Each call builds its own core, so loggers never share sampling state or
/// writers unless the caller passes a shared writer.
pub fn new_logger(options: LoggerOptions) -> Box<dyn Logger> {
    let core = Core {
        encoder: options.encoder,
        writer: options.writer,
        level: options.level,
        stacktrace_level: options.stacktrace_level,
        add_caller: options.add_caller,
        sampler: options.sampling.map(Sampler::new),
    };

    Box::new(JsonLogger {
        core: Arc::new(core),
        name: None,
        context: Vec::new(),
    })
}

impl Logger for JsonLogger {
    fn enabled(&self, level: Level) -> bool {
        level >= self.core.level
    }

    fn log(&self, record: &Record<'_>) {
        let core = &self.core;
        if !self.enabled(record.level) {
            return;
        }
        if let Some(sampler) = &core.sampler {
            if !sampler.check(record.level, record.message) {
                return;
            }
        }

        let stacktrace = (record.level >= core.stacktrace_level)
            .then(|| Backtrace::force_capture().to_string());
        let entry = Entry {
            level: record.level,
            time: Local::now().fixed_offset(),
            name: self.name.as_deref(),
            caller: if core.add_caller { record.caller } else { None },
            message: record.message,
            stacktrace,
        };
        let line = core.encoder.encode(&entry, &self.context, record.fields);

        let mut writer = core.writer.make_writer();
        if let Err(e) = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
        {
            eprintln!("{} log write error: {e}", Local::now().to_rfc3339());
        }
    }

    fn with_values(&self, fields: Vec<Field>) -> Box<dyn Logger> {
        let mut context = self.context.clone();
        context.extend(fields);
        Box::new(JsonLogger {
            core: Arc::clone(&self.core),
            name: self.name.clone(),
            context,
        })
    }

    fn with_name(&self, name: &str) -> Box<dyn Logger> {
        let name = match &self.name {
            Some(parent) => format!("{parent}.{name}"),
            None => name.to_string(),
        };
        Box::new(JsonLogger {
            core: Arc::clone(&self.core),
            name: Some(name),
            context: self.context.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::EncoderConfig;
    use crate::sampling::SamplingConfig;
    use crate::testing::SharedBuffer;

    fn logger(development: bool, buf: &SharedBuffer) -> Box<dyn Logger> {
        let cfg = if development {
            EncoderConfig::development()
        } else {
            EncoderConfig::production()
        };
        new_logger(LoggerOptions::new(JsonEncoder::new(cfg), development).with_writer(buf.clone()))
    }

    #[test]
    fn test_level_filter() {
        let buf = SharedBuffer::default();
        let log = logger(false, &buf);
        assert!(!log.enabled(Level::Debug));
        assert!(log.enabled(Level::Info));
        log.debug("hidden", &[]);
        log.info("shown", &[]);
        let lines = buf.json_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["msg"], "shown");
    }

    #[test]
    fn test_with_values_and_name() {
        let buf = SharedBuffer::default();
        let log = logger(false, &buf)
            .with_name("controller")
            .with_values(vec![Field::new("shoot", "garden")])
            .with_name("reconciler");
        log.info("reconciled", &[Field::new("attempt", 2)]);

        let lines = buf.json_lines();
        assert_eq!(lines[0]["logger"], "controller.reconciler");
        assert_eq!(lines[0]["shoot"], "garden");
        assert_eq!(lines[0]["attempt"], 2);
    }

    #[test]
    fn test_with_values_does_not_leak_into_parent() {
        let buf = SharedBuffer::default();
        let parent = logger(false, &buf);
        let _child = parent.with_values(vec![Field::new("child", true)]);
        parent.info("from parent", &[]);
        assert!(buf.json_lines()[0].get("child").is_none());
    }

    #[test]
    fn test_caller_only_when_enabled() {
        let buf = SharedBuffer::default();
        logger(true, &buf).info("dev", &[]);
        logger(false, &buf).info("prod", &[]);
        let lines = buf.json_lines();
        let caller = lines[0]["C"].as_str().unwrap();
        assert!(caller.contains(".rs:"), "unexpected caller {caller}");
        assert!(lines[1].get("caller").is_none());
    }

    #[test]
    fn test_error_with_adds_error_field() {
        let buf = SharedBuffer::default();
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        logger(false, &buf).error_with(&err, "open failed", &[Field::new("path", "/tmp/x")]);
        let line = &buf.json_lines()[0];
        assert_eq!(line["error"], "no such file");
        assert_eq!(line["path"], "/tmp/x");
        assert!(line["stacktrace"].is_string());
    }

    #[test]
    fn test_sampling_limits_repeats() {
        let buf = SharedBuffer::default();
        let opts = LoggerOptions::new(JsonEncoder::new(EncoderConfig::production()), false)
            .with_sampling(Some(SamplingConfig {
                initial: 3,
                thereafter: 0,
                tick: std::time::Duration::from_secs(60),
            }))
            .with_writer(buf.clone());
        let log = new_logger(opts);
        for _ in 0..10 {
            log.info("repeated", &[]);
        }
        log.info("different", &[]);
        assert_eq!(buf.json_lines().len(), 4);
    }
}
