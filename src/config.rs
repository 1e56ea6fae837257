//! Logging configuration.
//!
//! Loads the development flag and optional overrides from YAML files and
//! environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::LoggerResult;
use crate::factory;
use crate::level::Level;
use crate::logger::{new_logger, Logger, LoggerOptions};
use crate::sampling::SamplingConfig;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Use the development preset.
    #[serde(default)]
    pub development: bool,
    /// Minimum level, overriding the preset default.
    #[serde(default)]
    pub level: Option<String>,
    /// Minimum level that captures a stacktrace.
    #[serde(default)]
    pub stacktrace_level: Option<String>,
    /// Force sampling on or off.
    #[serde(default)]
    pub sampling: Option<bool>,
}

impl LoggingConfig {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (LOG_FACTORY__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("LOG_FACTORY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Factory options with this configuration's overrides applied.
    pub fn options(&self) -> LoggerResult<LoggerOptions> {
        let mut options = factory::options(self.development);
        if let Some(level) = &self.level {
            options = options.with_level(level.parse::<Level>()?);
        }
        if let Some(level) = &self.stacktrace_level {
            options = options.with_stacktrace_level(level.parse::<Level>()?);
        }
        match self.sampling {
            Some(true) => options = options.with_sampling(Some(SamplingConfig::default())),
            Some(false) => options = options.with_sampling(None),
            None => {}
        }
        Ok(options)
    }

    /// Build a logger writing to stderr.
    pub fn build(&self) -> LoggerResult<Box<dyn Logger>> {
        Ok(new_logger(self.options()?))
    }
}
