//! Subcommand handlers.

use clap::ArgMatches;
use tracing::{debug, info};

use super::commands::DOCS_URL;
use crate::browser::UrlOpener;
use crate::error::CommandError;

/// Everything a handler gets to work with.
pub struct CommandContext<'a> {
    /// Subcommand chain, e.g. `["deploy"]`.
    pub path: &'a [String],
    /// Matches of the invoked subcommand.
    pub matches: &'a ArgMatches,
    pub debug: bool,
    pub opener: &'a dyn UrlOpener,
}

impl CommandContext<'_> {
    /// The space-joined command path.
    pub fn command(&self) -> String {
        self.path.join(" ")
    }
}

pub type Handler = fn(&CommandContext<'_>) -> Result<(), CommandError>;

/// Looks up the handler for a top-level command name.
pub fn handler_for(name: &str) -> Option<Handler> {
    let handler: Handler = match name {
        "init" => init,
        "deploy" => deploy,
        "logs" => logs,
        "docs" => docs,
        "login" => login,
        "logout" => logout,
        "whoami" => whoami,
        _ => return None,
    };
    Some(handler)
}

/// Runs the handler registered for `ctx.path`.
pub fn dispatch(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let handler = ctx
        .path
        .first()
        .and_then(|name| handler_for(name))
        .ok_or_else(|| CommandError::NoHandler(ctx.command()))?;

    debug!(command = %ctx.command(), debug = ctx.debug, "dispatching");
    handler(ctx)
}

fn init(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

fn deploy(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

fn logs(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

fn docs(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    info!(url = DOCS_URL, "opening documentation");
    ctx.opener.open(DOCS_URL)
}

fn login(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

fn logout(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

fn whoami(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    not_available(ctx)
}

// Accounts and projects have no backend yet.
fn not_available(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    debug!(command = %ctx.command(), "nothing to do");
    Ok(())
}
