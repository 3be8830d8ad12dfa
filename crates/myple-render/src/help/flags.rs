//! Flag usage text.
//!
//! Flags are listed one per line in two columns: the switch column
//! (`-d, --debug`, or `    --name string` when there is no short form) and
//! the help text, aligned on the widest switch.

use clap::{Arg, ArgAction};

/// Spaces between the switch column and the help text.
const COLUMN_GAP: usize = 3;

/// Formats the usage lines for a set of flags.
///
/// Every line, including the last, ends with `\n`. Returns an empty string
/// when `args` is empty.
pub fn flag_usages(args: &[&Arg]) -> String {
    let switches: Vec<String> = args.iter().map(|arg| switch_column(arg)).collect();
    let width = switches.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (arg, switch) in args.iter().zip(&switches) {
        let help = help_column(arg);
        if help.is_empty() {
            out.push_str(switch);
        } else {
            out.push_str(&format!(
                "{:<width$}{}{}",
                switch,
                " ".repeat(COLUMN_GAP),
                help,
                width = width
            ));
        }
        out.push('\n');
    }
    out
}

fn switch_column(arg: &Arg) -> String {
    let mut column = match (arg.get_short(), arg.get_long()) {
        (Some(short), Some(long)) => format!("  -{}, --{}", short, long),
        (Some(short), None) => format!("  -{}", short),
        (None, Some(long)) => format!("      --{}", long),
        (None, None) => format!("      {}", arg.get_id()),
    };

    if takes_value(arg) {
        let value_name = arg
            .get_value_names()
            .and_then(|names| names.first())
            .map(|name| name.to_lowercase())
            .unwrap_or_else(|| "string".to_string());
        column.push(' ');
        column.push_str(&value_name);
    }
    column
}

fn help_column(arg: &Arg) -> String {
    let mut help = arg.get_help().map(|s| s.to_string()).unwrap_or_default();
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect();
    if takes_value(arg) && !defaults.is_empty() {
        help.push_str(&format!(" (default \"{}\")", defaults.join(",")));
    }
    help
}

fn takes_value(arg: &Arg) -> bool {
    matches!(arg.get_action(), ArgAction::Set | ArgAction::Append)
}
