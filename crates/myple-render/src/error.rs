//! Error types for usage rendering.
//!
//! [`RenderError`] wraps the underlying template engine's errors so callers
//! never depend on MiniJinja directly.

use thiserror::Error;

/// Error type for usage rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error, unknown function or filter.
    #[error("template error: {0}")]
    TemplateError(String),

    /// Help data could not be converted into template values.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A help request named a command that does not exist.
    #[error("unknown command: {0}")]
    CommandNotFound(String),

    /// Other rendering failure.
    #[error("{0}")]
    OperationError(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}
