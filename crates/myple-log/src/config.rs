//! Configuration lookup for the log pipeline.
//!
//! The pipeline only needs one setting, `log`, but reads it through
//! [`ConfigSource`] so callers can layer their own settings on top of the
//! environment and tests can run without touching process state.

use tracing_subscriber::filter::LevelFilter;

/// Process-wide prefix for environment-backed settings (`MYPLE_LOG`, ...).
pub const ENV_PREFIX: &str = "MYPLE";

/// Setting that selects log verbosity.
pub const LOG_KEY: &str = "log";

/// A read-only source of string settings.
pub trait ConfigSource: Send + Sync {
    /// Returns the value of `key`, or `None` when unset.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Settings read from prefixed environment variables.
///
/// Key `log` with prefix `MYPLE` reads `MYPLE_LOG`.
#[derive(Debug, Clone)]
pub struct EnvSource<R = RealEnv> {
    prefix: String,
    reader: R,
}

impl EnvSource<RealEnv> {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_reader(prefix, RealEnv)
    }
}

impl<R: EnvReader> EnvSource<R> {
    pub fn with_reader(prefix: impl Into<String>, reader: R) -> Self {
        Self {
            prefix: prefix.into(),
            reader,
        }
    }

    /// The environment variable name a key maps to.
    pub fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key).to_uppercase()
    }
}

impl<R: EnvReader> ConfigSource for EnvSource<R> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.reader.var(&self.var_name(key))
    }
}

/// Maps the `log` setting to a verbosity level.
///
/// `"debug"` and `"trace"` select those levels; any other value, or no value,
/// selects info.
pub fn level_from_config(config: &dyn ConfigSource) -> LevelFilter {
    match config.get_string(LOG_KEY).as_deref() {
        Some("debug") => LevelFilter::DEBUG,
        Some("trace") => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    }
}
