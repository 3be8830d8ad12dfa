//! The application: command tree, usage template, and the run loop.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgMatches, Command};
use myple_log::{ConfigSource, EnvReader, RealEnv, LOG_KEY};
use myple_render::{apply_style, HelpData, RenderError, UsageTemplate};

use super::commands::root;
use super::dispatch::{get_deepest_matches, resolve, Invocation};
use super::handlers::{dispatch, CommandContext};
use crate::browser::{SystemOpener, UrlOpener};
use crate::config::{Settings, DEBUG_KEY};
use crate::error::CommandError;

/// The `myple` application.
pub struct App {
    command: Command,
    usage: UsageTemplate,
}

impl App {
    /// Creates the app, styling help when stdout takes colors.
    pub fn new() -> Self {
        Self::with_style(console::colors_enabled())
    }

    /// Creates the app with help styling on or off.
    pub fn with_style(styled: bool) -> Self {
        let mut usage = UsageTemplate::new();
        if styled {
            apply_style(&mut usage);
        }
        Self {
            command: root(),
            usage,
        }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn usage(&self) -> &UsageTemplate {
        &self.usage
    }

    /// Renders the usage text for the command at `path`.
    pub fn render_help(&self, path: &[&str]) -> Result<String, RenderError> {
        let data = HelpData::for_path(&self.command, path)?;
        self.usage.render(&data)
    }

    /// Parses `args` into an invocation.
    pub fn parse_from<I, T>(&self, args: I) -> Result<(ArgMatches, Invocation), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(args)?;
        let invocation = resolve(&matches);
        Ok((matches, invocation))
    }

    /// Runs one command line.
    ///
    /// Help goes to `out`. Parse errors come back as [`clap::Error`] inside
    /// the `anyhow::Error` so the caller can let clap print them.
    pub fn run_from<I, T, R>(
        &self,
        args: I,
        env: R,
        opener: &dyn UrlOpener,
        out: &mut dyn Write,
    ) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        R: EnvReader,
    {
        let (matches, invocation) = self.parse_from(args)?;
        let deepest = get_deepest_matches(&matches);

        let mut settings = Settings::with_reader(env);
        settings.bind_flag(DEBUG_KEY, deepest, "debug");
        if settings.debug() && settings.get_string(LOG_KEY).is_none() {
            settings.set(LOG_KEY, "debug");
        }
        myple_log::initialize_from(&settings);

        match invocation {
            Invocation::Help(path) => {
                let path: Vec<&str> = path.iter().map(String::as_str).collect();
                let help = self.render_help(&path)?;
                write_help(out, &help)?;
            }
            Invocation::HelpTopic(topic) => {
                let path: Vec<&str> = topic.iter().map(String::as_str).collect();
                match self.render_help(&path) {
                    Ok(help) => write_help(out, &help)?,
                    Err(RenderError::CommandNotFound(_)) => {
                        writeln!(out, "Unknown help topic {:?}", topic.join(" "))
                            .map_err(CommandError::from)?;
                        write_help(out, &self.render_help(&[])?)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Invocation::Run(path) => {
                let ctx = CommandContext {
                    path: &path,
                    matches: deepest,
                    debug: settings.debug(),
                    opener,
                };
                dispatch(&ctx).with_context(|| format!("failed to run {}", ctx.command()))?;
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn write_help(out: &mut dyn Write, help: &str) -> Result<(), CommandError> {
    writeln!(out, "{}", help.trim_end_matches('\n'))?;
    out.flush()?;
    Ok(())
}

/// Runs `myple` with the process arguments and environment.
///
/// Handler failures are logged at error level and exit with status 1.
pub fn execute() -> ExitCode {
    let app = App::new();
    let mut stdout = io::stdout();

    match app.run_from(std::env::args_os(), RealEnv, &SystemOpener, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(clap_err) => clap_err.exit(),
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "command failed");
                ExitCode::FAILURE
            }
        },
    }
}
