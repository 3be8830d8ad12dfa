//! Layered settings.
//!
//! Values resolve in order: explicit overrides (flags given on the command
//! line), then `MYPLE_*` environment variables, then the caller's default.

use std::collections::HashMap;

use clap::parser::ValueSource;
use clap::ArgMatches;
use myple_log::{ConfigSource, EnvReader, EnvSource, RealEnv, ENV_PREFIX};

/// Setting toggled by `--debug` / `MYPLE_DEBUG`.
pub const DEBUG_KEY: &str = "debug";

#[derive(Debug, Clone)]
pub struct Settings<R = RealEnv> {
    env: EnvSource<R>,
    overrides: HashMap<String, String>,
}

impl<R: EnvReader> Settings<R> {
    /// Settings backed by `reader` instead of the process environment.
    pub fn with_reader(reader: R) -> Self {
        Self {
            env: EnvSource::with_reader(ENV_PREFIX, reader),
            overrides: HashMap::new(),
        }
    }

    /// Sets `key`, shadowing the environment.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(key.into(), value.into());
    }

    /// Binds a boolean flag to `key`.
    ///
    /// Only a flag given on the command line overrides the environment; the
    /// flag's default does not.
    pub fn bind_flag(&mut self, key: &str, matches: &ArgMatches, id: &str) {
        if matches.value_source(id) == Some(ValueSource::CommandLine) {
            let value = matches.get_flag(id);
            self.set(key, value.to_string());
        }
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_string(key).as_deref().is_some_and(parse_bool)
    }

    /// Whether debug mode is on.
    pub fn debug(&self) -> bool {
        self.get_bool(DEBUG_KEY)
    }
}

impl<R: EnvReader> ConfigSource for Settings<R> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| self.env.get_string(key))
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "t" | "true" | "y" | "yes" | "on"
    )
}
