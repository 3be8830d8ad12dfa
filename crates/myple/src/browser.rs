//! Opening URLs in the user's browser.
//!
//! Handlers go through [`UrlOpener`] so tests can record URLs instead of
//! launching anything.

use std::sync::Mutex;

use crate::error::CommandError;

/// Abstraction over the platform URL opener.
pub trait UrlOpener: Send + Sync {
    /// Open `url` with the default handler.
    fn open(&self, url: &str) -> Result<(), CommandError>;
}

/// Opens URLs with the platform command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), CommandError> {
        let (program, args) = open_command(url);
        tracing::debug!(program, url, "opening url");

        let status = std::process::Command::new(program)
            .args(&args)
            .status()
            .map_err(|e| CommandError::OpenFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::OpenFailed {
                url: url.to_string(),
                reason: status.to_string(),
            })
        }
    }
}

#[cfg(target_os = "macos")]
fn open_command(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}

#[cfg(windows)]
fn open_command(url: &str) -> (&'static str, Vec<String>) {
    // The empty string is the window title `start` expects first.
    (
        "cmd",
        vec!["/C".into(), "start".into(), String::new(), url.to_string()],
    )
}

#[cfg(not(any(target_os = "macos", windows)))]
fn open_command(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}

/// Records opened URLs for testing.
#[derive(Debug, Default)]
pub struct MockOpener {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl MockOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every call fails.
    pub fn failing() -> Self {
        Self {
            opened: Mutex::default(),
            fail: true,
        }
    }

    /// URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl UrlOpener for MockOpener {
    fn open(&self, url: &str) -> Result<(), CommandError> {
        if self.fail {
            return Err(CommandError::OpenFailed {
                url: url.to_string(),
                reason: "mock failure".to_string(),
            });
        }
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}
