//! Help rendering functions.

use clap::Command;

use super::data::HelpData;
use crate::error::RenderError;
use crate::style::apply_style;
use crate::template::UsageTemplate;

/// Renders the usage text for the command at `path` below `root`.
///
/// With `styled` set, the default template goes through [`apply_style`]
/// first and the output carries ANSI escapes.
pub fn render_help(root: &Command, path: &[&str], styled: bool) -> Result<String, RenderError> {
    let mut host = UsageTemplate::new();
    if styled {
        apply_style(&mut host);
    }

    let data = HelpData::for_path(root, path)?;
    host.render(&data)
}
