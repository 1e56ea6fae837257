//! The logger factory.

use tracing_subscriber::fmt::MakeWriter;

use crate::encoder::{DurationEncoding, EncoderConfig, JsonEncoder, TimeEncoding};
use crate::logger::{new_logger, Logger, LoggerOptions};

/// Build a JSON logger writing to stderr.
///
/// If `development` is true the development preset is used (stacktraces on
/// warnings, no sampling), otherwise the production preset (stacktraces on
/// errors, sampling). Either way timestamps are ISO-8601 and durations are
/// human-readable strings.
pub fn build_logger(development: bool) -> Box<dyn Logger> {
    new_logger(options(development))
}

/// Same as [`build_logger`], writing to `make_writer`.
pub fn build_logger_with_writer<M>(development: bool, make_writer: M) -> Box<dyn Logger>
where
    M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    new_logger(options(development).with_writer(make_writer))
}

/// Options [`build_logger`] uses, for callers that want to adjust them.
pub fn options(development: bool) -> LoggerOptions {
    let preset = if development {
        EncoderConfig::development()
    } else {
        EncoderConfig::production()
    };
    let encoder_config = preset
        .with_time_encoding(TimeEncoding::Iso8601)
        .with_duration_encoding(DurationEncoding::String);

    LoggerOptions::new(JsonEncoder::new(encoder_config), development)
}
