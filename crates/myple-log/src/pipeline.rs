//! One-shot installation of the process-wide logger.

use once_cell::sync::OnceCell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::build_info::BuildInfo;
use crate::config::{level_from_config, ConfigSource};
use crate::console::ConsoleFormat;

static GLOBAL: LogPipeline = LogPipeline::new();

/// What the one-time initialization produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerHandle {
    level: LevelFilter,
    build: BuildInfo,
    installed: bool,
}

impl LoggerHandle {
    /// Resolves the level and build metadata without installing anything.
    pub fn build(config: &dyn ConfigSource) -> Self {
        Self {
            level: level_from_config(config),
            build: BuildInfo::current(),
            installed: false,
        }
    }

    /// The console format records are rendered with.
    pub fn console_format(&self) -> ConsoleFormat {
        self.build
            .fields()
            .into_iter()
            .fold(ConsoleFormat::new(), |format, (name, value)| {
                format.context_field(name, value)
            })
    }

    /// Installs a stdout subscriber as the global default.
    ///
    /// If another global subscriber is already set the existing one is kept
    /// and [`installed`](Self::installed) reports `false`.
    pub fn install(mut self) -> Self {
        let layer = tracing_subscriber::fmt::layer()
            .event_format(self.console_format())
            .with_writer(std::io::stdout)
            .with_filter(self.level);

        self.installed = tracing_subscriber::registry().with(layer).try_init().is_ok();
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn build_info(&self) -> &BuildInfo {
        &self.build
    }

    /// Whether this handle's subscriber became the global default.
    pub fn installed(&self) -> bool {
        self.installed
    }
}

/// Guards logger construction so it happens exactly once.
///
/// The first caller of [`initialize`](Self::initialize) builds and installs
/// the logger. Concurrent callers block until it is done; later callers get
/// the same handle back without doing any work.
///
/// [`LogPipeline::global`] is the instance [`crate::initialize`] uses. Tests
/// can create their own with [`LogPipeline::new`].
pub struct LogPipeline {
    handle: OnceCell<LoggerHandle>,
}

impl LogPipeline {
    pub const fn new() -> Self {
        Self {
            handle: OnceCell::new(),
        }
    }

    /// The process-wide pipeline.
    pub fn global() -> &'static LogPipeline {
        &GLOBAL
    }

    /// Builds and installs the logger on first call.
    pub fn initialize(&self, config: &dyn ConfigSource) -> &LoggerHandle {
        self.initialize_with(|| LoggerHandle::build(config).install())
    }

    /// Runs `init` on first call and keeps its handle.
    pub fn initialize_with<F>(&self, init: F) -> &LoggerHandle
    where
        F: FnOnce() -> LoggerHandle,
    {
        self.handle.get_or_init(|| {
            let handle = init();
            tracing::debug!(
                verbosity = %handle.level,
                git_revision = %handle.build.git_revision,
                "logger initialized"
            );
            handle
        })
    }

    /// The handle, if initialization has happened.
    pub fn get(&self) -> Option<&LoggerHandle> {
        self.handle.get()
    }
}

impl Default for LogPipeline {
    fn default() -> Self {
        Self::new()
    }
}
