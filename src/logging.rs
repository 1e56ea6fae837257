//! Process-wide tracing setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bridge::LoggerLayer;
use crate::level::Level;
use crate::logger::Logger;

/// Install `logger` as the global tracing subscriber.
///
/// Reads the filter from the RUST_LOG environment variable.
/// Defaults to `debug` for loggers that accept debug entries, `info` otherwise.
///
/// Panics if a global subscriber is already set.
pub fn init(logger: Box<dyn Logger>) {
    subscriber(logger).init();
}

/// Like [`init`], returning an error if a global subscriber is already set.
pub fn try_init(logger: Box<dyn Logger>) -> Result<(), TryInitError> {
    subscriber(logger).try_init()
}

fn subscriber(logger: Box<dyn Logger>) -> impl SubscriberInitExt {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(logger.as_ref())));

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger).with_target(true))
}

fn default_directive(logger: &dyn Logger) -> &'static str {
    if logger.enabled(Level::Debug) {
        "debug"
    } else {
        "info"
    }
}
