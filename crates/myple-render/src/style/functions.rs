//! Render functions the styled usage template calls.
//!
//! Each function is a plain `String -> String` transform so it can be tested
//! without a template. Styling is forced: whether color is wanted at all is
//! decided before [`apply_style`](super::apply_style) runs, not here.

use console::Style;
use minijinja::Environment;
use once_cell::sync::Lazy;
use regex::Regex;

/// A flag token: one or two hyphens followed by non-whitespace.
static FLAG_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"--?\S+").expect("valid flag regex"));

/// Flag tokens colorized per line.
const FLAGS_PER_LINE: usize = 2;

fn heading() -> Style {
    Style::new().black().on_white().force_styling(true)
}

fn usage_heading() -> Style {
    Style::new().black().on_green().force_styling(true)
}

fn command_name() -> Style {
    Style::new().cyan().force_styling(true)
}

fn executable() -> Style {
    Style::new().green().force_styling(true)
}

fn flag() -> Style {
    Style::new().cyan().force_styling(true)
}

/// Registers every style render function on a MiniJinja environment.
pub fn register_style_functions(env: &mut Environment<'static>) {
    env.add_function("heading_style", heading_style);
    env.add_function("usage_style", usage_style);
    env.add_function("name_style", name_style);
    env.add_function("sum", sum);
    env.add_function("command_path_style", command_path_style);
    env.add_function("use_line_style", use_line_style);
    env.add_function("flag_style", flag_style);
}

/// Section heading: black on white.
pub fn heading_style(label: String) -> String {
    heading().apply_to(label).to_string()
}

/// The `Usage` heading: black on green.
pub fn usage_style(label: String) -> String {
    usage_heading().apply_to(label).to_string()
}

/// Subcommand name in the command list.
pub fn name_style(name: String) -> String {
    command_name().apply_to(name).to_string()
}

pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Full command path, e.g. `myple deploy`.
pub fn command_path_style(path: String) -> String {
    executable().apply_to(path).to_string()
}

/// Colors the first word of a use line and leaves the arguments alone.
///
/// `"deploy [flags] <target>"` becomes `"<green>deploy</green> [flags] <target>"`.
pub fn use_line_style(line: String) -> String {
    match line.split_once(' ') {
        Some((verb, rest)) => format!("{} {}", executable().apply_to(verb), rest),
        None => executable().apply_to(line).to_string(),
    }
}

/// Colors up to two flag tokens on each line of a flag usage block.
///
/// Only the first textual occurrence of each token is replaced, so a token
/// that reappears in the description keeps its later occurrence plain.
pub fn flag_style(usages: String) -> String {
    usages
        .split('\n')
        .map(|line| {
            let mut tokens: Vec<&str> = FLAG_TOKEN
                .find_iter(line)
                .take(FLAGS_PER_LINE)
                .map(|m| m.as_str())
                .collect();
            // A repeated token is wrapped once, not nested.
            tokens.dedup();
            let mut styled = line.to_string();
            for token in tokens {
                styled = styled.replacen(token, &flag().apply_to(token).to_string(), 1);
            }
            styled
        })
        .collect::<Vec<_>>()
        .join("\n")
}
