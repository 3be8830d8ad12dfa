//! # Myple - Work seamlessly with Myple from the command-line
//!
//! The `myple` binary is a thin shell over [`cli::App`]:
//!
//! ```rust
//! use myple::cli::App;
//!
//! let app = App::with_style(false);
//! let help = app.render_help(&["deploy"]).unwrap();
//! assert!(help.starts_with("Usage:\n  myple deploy [flags]"));
//! ```
//!
//! Help output goes through the usage template from `myple-render`, styled
//! when stdout supports colors. Logging is installed once per process by
//! `myple-log`, at the level picked by `MYPLE_LOG` (or `debug` with
//! `--debug` / `MYPLE_DEBUG`).

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;

pub use browser::{MockOpener, SystemOpener, UrlOpener};
pub use config::Settings;
pub use error::CommandError;
