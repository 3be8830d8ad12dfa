//! # Myple Log - Colorized Console Logging
//!
//! Installs one `tracing` subscriber per process that renders events as
//! colorized console lines:
//!
//! ```text
//! 2024-03-05T08:20:30.123456Z INFO   src/main.rs:12 > deploying target=staging
//! ```
//!
//! The level comes from the `log` setting (`MYPLE_LOG`): `debug`, `trace`, or
//! info for anything else.
//!
//! ```rust,no_run
//! myple_log::initialize();
//! myple_log::initialize(); // no-op
//! tracing::info!(target_env = "staging", "deploying");
//! ```
//!
//! The field formatters ([`format_level`], [`format_field_name`],
//! [`format_timestamp`]) are plain functions and can be used on their own.

pub mod build_info;
pub mod color;
pub mod config;
pub mod console;
pub mod format;
pub mod pipeline;

pub use build_info::BuildInfo;
pub use color::{Attr, Color};
pub use config::{
    level_from_config, ConfigSource, EnvReader, EnvSource, MockEnv, RealEnv, ENV_PREFIX, LOG_KEY,
};
pub use console::{ConsoleFormat, LogRecord};
pub use format::{format_field_name, format_level, format_timestamp, FieldFormatters, FMT_ERROR};
pub use pipeline::{LogPipeline, LoggerHandle};

/// Installs the process-wide logger, reading settings from `MYPLE_*`
/// environment variables. Only the first call does anything.
pub fn initialize() {
    LogPipeline::global().initialize(&EnvSource::new(ENV_PREFIX));
}

/// Like [`initialize`], with settings from `config`.
pub fn initialize_from(config: &dyn ConfigSource) -> &'static LoggerHandle {
    LogPipeline::global().initialize(config)
}
