//! Options consumed by the logger constructor.

use std::fmt;
use std::io;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

use crate::encoder::JsonEncoder;
use crate::level::Level;
use crate::sampling::SamplingConfig;

/// Everything needed to construct a logger.
///
/// Defaults depend on the development flag:
///
/// | option             | development | production          |
/// |--------------------|-------------|---------------------|
/// | `level`            | `Debug`     | `Info`              |
/// | `stacktrace_level` | `Warn`      | `Error`             |
/// | `add_caller`       | yes         | no                  |
/// | `sampling`         | none        | 100 then every 100  |
///
/// Output goes to stderr unless a writer is set.
pub struct LoggerOptions {
    pub encoder: JsonEncoder,
    pub development: bool,
    pub level: Level,
    pub stacktrace_level: Level,
    pub add_caller: bool,
    pub sampling: Option<SamplingConfig>,
    pub(crate) writer: BoxMakeWriter,
}

impl LoggerOptions {
    pub fn new(encoder: JsonEncoder, development: bool) -> Self {
        if development {
            Self {
                encoder,
                development,
                level: Level::Debug,
                stacktrace_level: Level::Warn,
                add_caller: true,
                sampling: None,
                writer: BoxMakeWriter::new(io::stderr),
            }
        } else {
            Self {
                encoder,
                development,
                level: Level::Info,
                stacktrace_level: Level::Error,
                add_caller: false,
                sampling: Some(SamplingConfig::default()),
                writer: BoxMakeWriter::new(io::stderr),
            }
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_stacktrace_level(mut self, level: Level) -> Self {
        self.stacktrace_level = level;
        self
    }

    pub fn with_caller(mut self, add_caller: bool) -> Self {
        self.add_caller = add_caller;
        self
    }

    pub fn with_sampling(mut self, sampling: Option<SamplingConfig>) -> Self {
        self.sampling = sampling;
        self
    }

    /// Send entries to `make_writer` instead of stderr.
    pub fn with_writer<M>(mut self, make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = BoxMakeWriter::new(make_writer);
        self
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("encoder", &self.encoder)
            .field("development", &self.development)
            .field("level", &self.level)
            .field("stacktrace_level", &self.stacktrace_level)
            .field("add_caller", &self.add_caller)
            .field("sampling", &self.sampling)
            .finish_non_exhaustive()
    }
}
