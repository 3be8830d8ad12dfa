//! Help data extraction from clap commands.

use clap::{Arg, Command};
use serde::Serialize;

use super::flags::flag_usages;
use crate::error::RenderError;

/// Minimum width of the name column in the command list.
pub const MIN_NAME_PADDING: usize = 11;

/// Everything a usage template can reference for one command.
#[derive(Debug, Clone, Serialize)]
pub struct HelpData {
    pub name: String,
    pub short: String,
    /// Space-separated names from the root down to this command.
    pub command_path: String,
    /// One-line invocation summary, e.g. `myple deploy [flags]`.
    pub use_line: String,
    /// True when the command does work itself rather than only grouping
    /// subcommands.
    pub runnable: bool,
    pub has_subcommands: bool,
    pub aliases: Vec<String>,
    pub name_and_aliases: String,
    pub commands: Vec<CommandEntry>,
    pub has_local_flags: bool,
    pub has_inherited_flags: bool,
    pub local_flags: FlagSet,
    pub inherited_flags: FlagSet,
}

/// A subcommand row in the command list.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    pub name: String,
    pub short: String,
    pub name_padding: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlagSet {
    pub flag_usages: String,
}

impl HelpData {
    /// Extracts help data for the command at `path` below `root`.
    ///
    /// An empty path selects `root` itself. Global args of ancestors become
    /// the inherited flags of the selected command.
    pub fn for_path(root: &Command, path: &[&str]) -> Result<Self, RenderError> {
        let mut lineage: Vec<&Command> = vec![root];
        let mut current = root;
        for name in path {
            current = find_subcommand(current, name)
                .ok_or_else(|| RenderError::CommandNotFound(path.join(" ")))?;
            lineage.push(current);
        }

        let (ancestors, _) = lineage.split_at(lineage.len() - 1);
        Ok(extract_help_data(current, ancestors))
    }
}

/// Finds a direct subcommand by name or visible alias.
fn find_subcommand<'a>(cmd: &'a Command, name: &str) -> Option<&'a Command> {
    cmd.get_subcommands()
        .find(|sub| sub.get_name() == name || sub.get_all_aliases().any(|alias| alias == name))
}

fn extract_help_data(cmd: &Command, ancestors: &[&Command]) -> HelpData {
    let name = cmd.get_name().to_string();
    let short = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    let command_path = ancestors
        .iter()
        .map(|c| c.get_name())
        .chain(std::iter::once(cmd.get_name()))
        .collect::<Vec<_>>()
        .join(" ");

    let mut subs: Vec<&Command> = cmd.get_subcommands().filter(|s| !s.is_hide_set()).collect();
    subs.sort_by_key(|s| s.get_display_order());
    let name_padding = subs
        .iter()
        .map(|s| s.get_name().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_PADDING);
    let commands: Vec<CommandEntry> = subs
        .iter()
        .map(|sub| CommandEntry {
            name: sub.get_name().to_string(),
            short: sub.get_about().map(|s| s.to_string()).unwrap_or_default(),
            name_padding,
        })
        .collect();

    let local: Vec<&Arg> = visible_flags(cmd).collect();
    let inherited: Vec<&Arg> = ancestors
        .iter()
        .flat_map(|a| visible_flags(*a))
        .filter(|a| a.is_global_set())
        .collect();

    let aliases: Vec<String> = cmd.get_visible_aliases().map(|a| a.to_string()).collect();
    let name_and_aliases = std::iter::once(name.clone())
        .chain(aliases.iter().cloned())
        .collect::<Vec<_>>()
        .join(", ");

    let use_line = build_use_line(cmd, &command_path, !local.is_empty() || !inherited.is_empty());

    HelpData {
        name,
        short,
        command_path,
        use_line,
        runnable: commands.is_empty(),
        has_subcommands: !commands.is_empty(),
        aliases,
        name_and_aliases,
        commands,
        has_local_flags: !local.is_empty(),
        has_inherited_flags: !inherited.is_empty(),
        local_flags: FlagSet {
            flag_usages: flag_usages(&local),
        },
        inherited_flags: FlagSet {
            flag_usages: flag_usages(&inherited),
        },
    }
}

fn visible_flags(cmd: &Command) -> impl Iterator<Item = &Arg> {
    let mut args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| !a.is_hide_set() && !a.is_positional())
        .collect();
    args.sort_by_key(|a| a.get_display_order());
    args.into_iter()
}

fn build_use_line(cmd: &Command, command_path: &str, has_flags: bool) -> String {
    let mut line = command_path.to_string();
    if has_flags {
        line.push_str(" [flags]");
    }
    for arg in cmd.get_positionals().filter(|a| !a.is_hide_set()) {
        let id = arg.get_id().as_str().to_string();
        if arg.is_required_set() {
            line.push_str(&format!(" <{}>", id));
        } else {
            line.push_str(&format!(" [{}]", id));
        }
    }
    line
}
