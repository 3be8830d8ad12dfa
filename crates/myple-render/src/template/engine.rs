//! The usage template host.

use minijinja::{Environment, Value};

use super::functions::register_builtins;
use crate::error::RenderError;
use crate::help::HelpData;

/// The stock usage template, before any styling.
///
/// Section markers (`Usage:`, `Aliases:`, `Available Commands:`, `Flags:`,
/// `Global Flags:`) are plain text; everything command-specific is a
/// placeholder over [`HelpData`].
pub const DEFAULT_USAGE_TEMPLATE: &str = include_str!("usage.txt");

/// Holds a usage template together with the functions it can call.
///
/// # Example
///
/// ```rust
/// use myple_render::UsageTemplate;
///
/// let mut host = UsageTemplate::new();
/// host.add_function("shout", |s: String| s.to_uppercase());
/// host.set_usage_template("{{ shout(command_path) }}");
/// assert_eq!(host.usage_template(), "{{ shout(command_path) }}");
/// ```
pub struct UsageTemplate {
    env: Environment<'static>,
    template: String,
}

impl UsageTemplate {
    /// Creates a host with the default template and the builtin functions.
    pub fn new() -> Self {
        Self::with_template(DEFAULT_USAGE_TEMPLATE)
    }

    /// Creates a host with a custom template and the builtin functions.
    pub fn with_template(template: impl Into<String>) -> Self {
        let mut env = Environment::new();
        register_builtins(&mut env);
        Self {
            env,
            template: template.into(),
        }
    }

    /// Returns the current usage template text.
    pub fn usage_template(&self) -> &str {
        &self.template
    }

    /// Replaces the usage template text.
    ///
    /// The text is compiled on each render, so a broken template surfaces as a
    /// [`RenderError`] from [`render`](Self::render).
    pub fn set_usage_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Registers a text-to-text render function under `name`.
    ///
    /// Functions with other signatures go through
    /// [`environment_mut`](Self::environment_mut).
    pub fn add_function<F>(&mut self, name: &'static str, f: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.env.add_function(name, move |s: String| f(s));
    }

    /// Returns the function registry the template renders with.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns the function registry mutably, to register render functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    /// Renders the current template against one command's help data.
    pub fn render(&self, data: &HelpData) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(&self.template, value)?)
    }
}

impl Default for UsageTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::{CommandEntry, FlagSet};

    fn leaf_data() -> HelpData {
        HelpData {
            name: "login".into(),
            short: "Logs into your account or creates a new one".into(),
            command_path: "myple login".into(),
            use_line: "myple login [flags]".into(),
            runnable: true,
            has_subcommands: false,
            aliases: vec![],
            name_and_aliases: "login".into(),
            commands: vec![],
            has_local_flags: false,
            has_inherited_flags: true,
            local_flags: FlagSet::default(),
            inherited_flags: FlagSet {
                flag_usages: "  -d, --debug   Debug mode\n".into(),
            },
        }
    }

    #[test]
    fn test_add_function_is_callable_from_template() {
        let mut host = UsageTemplate::with_template("{{ shout(command_path) }}");
        host.add_function("shout", |s: String| s.to_uppercase());
        assert_eq!(host.render(&leaf_data()).unwrap(), "MYPLE LOGIN");
    }

    #[test]
    fn test_default_template_renders_leaf_command() {
        let host = UsageTemplate::new();
        let out = host.render(&leaf_data()).unwrap();
        assert_eq!(
            out,
            "Usage:\n  myple login [flags]\n\nGlobal Flags:\n  -d, --debug   Debug mode"
        );
    }

    #[test]
    fn test_default_template_renders_command_list() {
        let mut data = leaf_data();
        data.runnable = false;
        data.has_subcommands = true;
        data.has_inherited_flags = false;
        data.command_path = "myple".into();
        data.commands = vec![CommandEntry {
            name: "docs".into(),
            short: "Opens the documentation".into(),
            name_padding: 11,
        }];

        let out = UsageTemplate::new().render(&data).unwrap();
        assert!(out.contains("Available Commands:\n  docs        Opens the documentation"));
        assert!(out.ends_with(
            "Use \"myple [command] --help\" for more information about a command."
        ));
    }

    #[test]
    fn test_set_usage_template_replaces_text() {
        let mut host = UsageTemplate::new();
        host.set_usage_template("{{ name }}!");
        assert_eq!(host.render(&leaf_data()).unwrap(), "login!");
    }

    #[test]
    fn test_registered_function_is_callable() {
        let mut host = UsageTemplate::with_template("{{ wrap(name) }}");
        host.environment_mut()
            .add_function("wrap", |s: String| format!("<{}>", s));
        assert_eq!(host.render(&leaf_data()).unwrap(), "<login>");
    }

    #[test]
    fn test_unknown_function_is_template_error() {
        let host = UsageTemplate::with_template("{{ nope(name) }}");
        let err = host.render(&leaf_data()).unwrap_err();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }
}
