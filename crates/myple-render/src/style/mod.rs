//! Usage template styling.
//!
//! [`apply_style`] rewrites a host's usage template in three ordered passes:
//!
//! 1. [`style_headers`]: section markers become heading function calls
//! 2. [`style_commands`]: command names, the command path and the use line
//!    go through color functions
//! 3. [`style_flags`]: flag usage blocks go through `flag_style`
//!
//! Each pass is a plain text transform. A placeholder the pass looks for but
//! cannot find is left alone, so an unfamiliar template degrades to partially
//! styled (or unstyled) output instead of failing.
//!
//! Passes are not idempotent. Apply them once per template.

mod functions;

pub use functions::{
    command_path_style, flag_style, heading_style, name_style, register_style_functions, sum,
    usage_style, use_line_style,
};

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::template::UsageTemplate;

/// Extra width added to the command name column.
///
/// A colorized name carries escape bytes that count toward `rpad` but take no
/// columns on screen; without this the descriptions would no longer line up.
pub const NAME_PADDING_COMPENSATION: i64 = 10;

/// Literal section markers and the heading call each becomes.
const SECTION_MARKERS: [(&str, &str); 4] = [
    ("Usage:", r#"{{ usage_style(" Usage ") }}"#),
    ("Aliases:", r#"{{ heading_style(" Aliases ") }}"#),
    ("Available Commands:", r#"{{ heading_style(" Commands ") }}"#),
    ("Global Flags:", r#"{{ heading_style(" Global Flags ") }}"#),
];

const FLAGS_HEADING: &str = r#"{{ heading_style(" Flags ") }}"#;

static FLAGS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Flags:[^\S\n]*$").expect("valid flags line regex"));

static PADDED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{\{\s*rpad\(\s*cmd\.name\s*,\s*cmd\.name_padding\s*\)\s*\}\}")
        .expect("valid padded name regex")
});

static PADDED_NAME_STYLED: Lazy<String> = Lazy::new(|| {
    format!(
        "{{{{ rpad(name_style(cmd.name), sum(cmd.name_padding, {})) }}}}",
        NAME_PADDING_COMPENSATION
    )
});

static COMMAND_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{\{\s*command_path\s*\}\}").expect("valid command path regex")
});

static USE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*use_line\s*\}\}").expect("valid use line regex"));

static FLAG_USAGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)((?:inherited|local)_flags\.flag_usages)").expect("valid flag usages regex")
});

/// Styles the host's usage template and registers the render functions it
/// now calls.
pub fn apply_style(host: &mut UsageTemplate) {
    register_style_functions(host.environment_mut());

    let template = style_headers(host.usage_template());
    let template = style_commands(&template);
    let template = style_flags(&template);
    host.set_usage_template(template);
}

/// Replaces the section markers with heading calls.
///
/// Each marker is replaced at its first occurrence. A line consisting of
/// exactly `Flags:` (trailing blanks allowed) becomes the `Flags` heading;
/// `Flags:` inside other text, such as `Global Flags:`, is not touched by that
/// rule.
pub fn style_headers(template: &str) -> String {
    let mut out = template.to_string();
    for (marker, heading) in SECTION_MARKERS {
        out = out.replacen(marker, heading, 1);
    }
    FLAGS_LINE
        .replace_all(&out, NoExpand(FLAGS_HEADING))
        .into_owned()
}

/// Routes command names, the command path and the use line through color
/// functions.
///
/// The padded name placeholder also gets [`NAME_PADDING_COMPENSATION`] added
/// to its width.
pub fn style_commands(template: &str) -> String {
    let out = PADDED_NAME.replace_all(template, NoExpand(PADDED_NAME_STYLED.as_str()));
    let out = COMMAND_PATH.replace_all(&out, NoExpand("{{ command_path_style(command_path) }}"));
    USE_LINE
        .replace_all(&out, NoExpand("{{ use_line_style(use_line) }}"))
        .into_owned()
}

/// Wraps local and inherited flag usage references in `flag_style`.
pub fn style_flags(template: &str) -> String {
    FLAG_USAGES
        .replace_all(template, "flag_style(${1})")
        .into_owned()
}
