//! Log Factory demo binary.
//!
//! Builds a logger from configuration, installs it as the tracing
//! subscriber and emits a few sample entries.

use std::time::{Duration, Instant};

use log_factory::{logging, Field, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let config = LoggingConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let logger = config.build()?;
    let started = Instant::now();

    logger.info(
        "Logger built",
        &[
            Field::new("development", config.development),
            Field::new("version", env!("CARGO_PKG_VERSION")),
        ],
    );

    let worker = logger.with_name("worker").with_values(vec![Field::new("job", "demo")]);
    worker.debug("Starting job", &[]);
    worker.warn(
        "Job is slow",
        &[Field::new("elapsed", Duration::from_millis(1500))],
    );

    logging::init(config.build()?);

    tracing::info!(elapsed = ?started.elapsed(), "Sample entries written");

    Ok(())
}
