//! Builtin template functions.
//!
//! These are available to every usage template, styled or not.

use minijinja::Environment;

/// Registers the builtin functions and filters on a MiniJinja environment.
///
/// - `rpad(value, width)`: left-justifies `value` in a field of `width` chars
/// - `trim_trailing_whitespace` (filter): strips whitespace at the end
pub fn register_builtins(env: &mut Environment<'static>) {
    env.add_function("rpad", rpad);
    env.add_filter("trim_trailing_whitespace", trim_trailing_whitespace);
}

/// Pads `value` on the right with spaces up to `width` characters.
///
/// Width is counted in chars, so escape sequences embedded in `value` count
/// toward it even though they occupy no terminal columns.
pub fn rpad(value: String, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

pub fn trim_trailing_whitespace(value: String) -> String {
    value.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpad_pads_short_values() {
        assert_eq!(rpad("init".into(), 8), "init    ");
    }

    #[test]
    fn test_rpad_never_truncates() {
        assert_eq!(rpad("deployment".into(), 4), "deployment");
    }

    #[test]
    fn test_trim_trailing_whitespace_keeps_leading_indent() {
        assert_eq!(
            trim_trailing_whitespace("  -d, --debug   Debug mode\n".into()),
            "  -d, --debug   Debug mode"
        );
    }

    #[test]
    fn test_builtins_callable_from_template() {
        let mut env = Environment::new();
        register_builtins(&mut env);
        let out = env
            .render_str(
                "[{{ rpad(name, 6) }}]{{ text | trim_trailing_whitespace }}|",
                minijinja::context! { name => "logs", text => "x  \n" },
            )
            .unwrap();
        assert_eq!(out, "[logs  ]x|");
    }
}
