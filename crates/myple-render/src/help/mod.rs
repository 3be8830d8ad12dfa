//! Help data extraction and rendering for clap commands.
//!
//! - [`HelpData`]: the values a usage template is rendered against
//! - [`render_help`]: render help for a command path, styled or plain

mod data;
mod flags;
mod render;

pub use data::{CommandEntry, FlagSet, HelpData, MIN_NAME_PADDING};
pub use flags::flag_usages;
pub use render::render_help;
