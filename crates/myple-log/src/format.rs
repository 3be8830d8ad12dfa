//! Field formatters for console log lines.
//!
//! Each formatter takes the raw field value and returns its display string.
//! None of them fail: a value of the wrong type renders as [`FMT_ERROR`].
//!
//! Two behaviors are kept on purpose even though they look accidental:
//!
//! - an unrecognized level name gets color code `0`, giving the escape
//!   `\x1b[0;1m` (a reset plus bold) instead of a color
//! - a timestamp that fails to parse is not reported; the zero instant
//!   `0001-01-01T00:00:00.000000Z` is printed in its place

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;

use crate::color::{Attr, Color, RESET};

/// Printed in place of a field whose value has an unexpected type.
pub const FMT_ERROR: &str = "FMT_ERROR";

/// Display profile for timestamps: UTC, microseconds, `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Width the level name is padded to.
const LEVEL_WIDTH: usize = 6;

/// A field formatter.
pub type FieldFormatter = fn(&Value) -> String;

/// The three formatters a console line is built with.
#[derive(Debug, Clone, Copy)]
pub struct FieldFormatters {
    pub level: FieldFormatter,
    pub field_name: FieldFormatter,
    pub timestamp: FieldFormatter,
}

impl Default for FieldFormatters {
    fn default() -> Self {
        Self {
            level: format_level,
            field_name: format_field_name,
            timestamp: format_timestamp,
        }
    }
}

/// Renders a level name as bold, colored, uppercase and padded to 6 chars.
///
/// `info` is green, `debug` blue, `trace` magenta, `error` red.
pub fn format_level(value: &Value) -> String {
    let Some(level) = value.as_str() else {
        return FMT_ERROR.to_string();
    };

    let color = level_color(level).map(Color::code).unwrap_or(0);
    format!(
        "\x1b[{};{}m{:<width$}{}",
        color,
        Attr::Bold,
        level.to_uppercase(),
        RESET,
        width = LEVEL_WIDTH
    )
}

fn level_color(level: &str) -> Option<Color> {
    match level {
        "info" => Some(Color::Green),
        "debug" => Some(Color::Blue),
        "trace" => Some(Color::Magenta),
        "error" => Some(Color::Red),
        _ => None,
    }
}

/// Renders a field name in italic yellow followed by a plain `=`.
pub fn format_field_name(value: &Value) -> String {
    match value.as_str() {
        Some(name) => format!("\x1b[{};{}m{}{}=", Color::Yellow, Attr::Italic, name, RESET),
        None => FMT_ERROR.to_string(),
    }
}

/// Reparses an RFC 3339 timestamp and renders it in UTC, in white.
pub fn format_timestamp(value: &Value) -> String {
    let Some(raw) = value.as_str() else {
        return FMT_ERROR.to_string();
    };

    let instant = DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| zero_instant());
    format!(
        "\x1b[{}m{}{}",
        Color::White,
        instant.format(TIMESTAMP_FORMAT),
        RESET
    )
}

/// January 1 of year 1, midnight UTC.
fn zero_instant() -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default();
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}
