//! Usage template host.
//!
//! [`UsageTemplate`] plays the role of the command framework's template
//! machinery: it hands out the current usage template text, lets callers
//! register named render functions, accepts a replacement template and renders
//! it against [`HelpData`](crate::HelpData).

mod engine;
mod functions;

pub use engine::{UsageTemplate, DEFAULT_USAGE_TEMPLATE};
pub use functions::{register_builtins, rpad, trim_trailing_whitespace};
