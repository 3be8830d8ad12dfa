//! Error types for command dispatch.

use myple_render::RenderError;
use thiserror::Error;

/// Errors raised while running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No handler is registered for the command path.
    #[error("no handler for command: {0}")]
    NoHandler(String),

    /// The platform opener could not be launched or reported failure.
    #[error("failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },

    /// Help text could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
