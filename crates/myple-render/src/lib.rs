//! # Myple Render - Styled Usage Templates
//!
//! `myple-render` turns a clap [`Command`](clap::Command) tree into usage text
//! through a small template host built on MiniJinja, and can restyle that
//! template so the rendered help is colorized.
//!
//! ## Core Concepts
//!
//! - [`UsageTemplate`]: The template host. Owns the usage template text and the
//!   environment of named render functions the template may call.
//! - [`HelpData`]: The values a usage template is rendered against, extracted
//!   from a clap command (name, command path, use line, subcommands, flags).
//! - [`apply_style`]: Rewrites a host's template so headings, command names,
//!   paths and flags go through color render functions.
//!
//! ## Quick Start
//!
//! ```rust
//! use clap::{Arg, ArgAction, Command};
//! use myple_render::{apply_style, HelpData, UsageTemplate};
//!
//! let cmd = Command::new("myple")
//!     .arg(Arg::new("debug").short('d').long("debug").action(ArgAction::SetTrue).help("Debug mode"))
//!     .subcommand(Command::new("login").about("Logs into your account"));
//!
//! let mut host = UsageTemplate::new();
//! apply_style(&mut host);
//!
//! let data = HelpData::for_path(&cmd, &[]).unwrap();
//! let help = host.render(&data).unwrap();
//! assert!(help.contains("login"));
//! ```
//!
//! Styling is applied once per host. The rewritten template keeps every data
//! reference of the plain one; only the presentation changes.

pub mod error;
pub mod help;
pub mod style;
pub mod template;

pub use error::RenderError;
pub use help::{render_help, CommandEntry, FlagSet, HelpData};
pub use style::{apply_style, style_commands, style_flags, style_headers};
pub use template::{UsageTemplate, DEFAULT_USAGE_TEMPLATE};
