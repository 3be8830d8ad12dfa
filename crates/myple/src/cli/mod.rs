//! Command-line surface: the command tree, argument resolution, handlers,
//! and the help interception that renders usage through the template.

mod app;
pub mod commands;
pub mod dispatch;
pub mod handlers;

pub use app::{execute, App};
pub use dispatch::{extract_command_path, resolve, Invocation};
pub use handlers::{CommandContext, Handler};
