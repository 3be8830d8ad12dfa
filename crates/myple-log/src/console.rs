//! Console line layout.
//!
//! A line reads:
//!
//! ```text
//! <timestamp> <LEVEL > <file:line> > <message> <name>=<value> ...
//! ```
//!
//! Event fields and context fields are merged and sorted by name. Names in
//! the excluded set are dropped from the console but stay on the record.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::color::{Attr, Color, RESET};
use crate::format::FieldFormatters;

/// Field names hidden from console output by default.
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 3] = ["user_agent", "git_revision", "rust_version"];

/// One log event, captured before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// RFC 3339 with nanoseconds.
    pub timestamp: String,
    /// Lowercase level name.
    pub level: String,
    /// `file:line` of the call site, when known.
    pub caller: Option<String>,
    pub message: String,
    pub fields: Vec<(String, Value)>,
}

impl LogRecord {
    /// Captures a tracing event, stamped with the current time.
    pub fn from_event(event: &Event<'_>) -> Self {
        let meta = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let caller = match (meta.file(), meta.line()) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            (Some(file), None) => Some(file.to_string()),
            _ => None,
        };

        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
            level: meta.level().as_str().to_lowercase(),
            caller,
            message: collector.message,
            fields: collector.fields,
        }
    }
}

/// Collects an event's fields as JSON values.
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(String, Value)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, Value::String(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        let value = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.to_string()));
        self.push(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, Value::String(format!("{:?}", value)));
    }
}

/// Event format that renders records through a [`FieldFormatters`] set.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    formatters: FieldFormatters,
    context: Vec<(String, Value)>,
    excluded: BTreeSet<String>,
}

impl ConsoleFormat {
    /// Creates a format with the default formatters and excluded fields.
    pub fn new() -> Self {
        Self {
            formatters: FieldFormatters::default(),
            context: Vec::new(),
            excluded: DEFAULT_EXCLUDED_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn formatters(mut self, formatters: FieldFormatters) -> Self {
        self.formatters = formatters;
        self
    }

    /// Adds a string field attached to every record.
    pub fn context_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((name.into(), Value::String(value.into())));
        self
    }

    /// Replaces the set of field names hidden from the console.
    pub fn exclude_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    /// Renders one record as a console line, without the trailing newline.
    pub fn render(&self, record: &LogRecord) -> String {
        let f = &self.formatters;
        let mut parts = vec![
            (f.timestamp)(&Value::String(record.timestamp.clone())),
            (f.level)(&Value::String(record.level.clone())),
        ];

        if let Some(caller) = &record.caller {
            parts.push(format!(
                "\x1b[{}m{}{}\x1b[{}m >{}",
                Attr::Bold,
                caller,
                RESET,
                Color::Cyan,
                RESET
            ));
        }

        if !record.message.is_empty() {
            parts.push(record.message.clone());
        }

        let mut fields: Vec<&(String, Value)> = record
            .fields
            .iter()
            .chain(self.context.iter())
            .filter(|(name, _)| !self.excluded.contains(name))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, value) in fields {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            parts.push(format!("{}{}", (f.field_name)(&Value::String(name.clone())), value));
        }

        parts.join(" ")
    }
}

impl Default for ConsoleFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let record = LogRecord::from_event(event);
        writeln!(writer, "{}", self.render(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_field_name, format_level, format_timestamp};
    use serde_json::json;

    fn record() -> LogRecord {
        LogRecord {
            timestamp: "2024-03-05T08:20:30.000001Z".into(),
            level: "info".into(),
            caller: Some("src/main.rs:12".into()),
            message: "deploying".into(),
            fields: vec![
                ("target".into(), json!("staging")),
                ("attempt".into(), json!(2)),
            ],
        }
    }

    #[test]
    fn test_render_layout() {
        let line = ConsoleFormat::new().render(&record());
        let expected = format!(
            "{} {} \x1b[1msrc/main.rs:12\x1b[0m\x1b[36m >\x1b[0m deploying {}2 {}staging",
            format_timestamp(&json!("2024-03-05T08:20:30.000001Z")),
            format_level(&json!("info")),
            format_field_name(&json!("attempt")),
            format_field_name(&json!("target")),
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_context_fields_excluded_by_default() {
        let line = ConsoleFormat::new()
            .context_field("git_revision", "abc123")
            .context_field("rust_version", "rustc 1.80.0")
            .render(&record());
        assert!(!line.contains("abc123"));
        assert!(!line.contains("git_revision"));
    }

    #[test]
    fn test_context_fields_shown_when_not_excluded() {
        let line = ConsoleFormat::new()
            .exclude_fields(Vec::<String>::new())
            .context_field("git_revision", "abc123")
            .render(&record());
        assert!(line.ends_with(&format!("{}abc123 {}staging",
            format_field_name(&json!("git_revision")),
            format_field_name(&json!("target")))));
    }

    #[test]
    fn test_event_field_excluded() {
        let mut rec = record();
        rec.fields.push(("user_agent".into(), json!("curl/8")));
        let line = ConsoleFormat::new().render(&rec);
        assert!(!line.contains("curl/8"));
    }

    #[test]
    fn test_no_caller_no_message() {
        let rec = LogRecord {
            caller: None,
            message: String::new(),
            fields: vec![],
            ..record()
        };
        let line = ConsoleFormat::new().render(&rec);
        assert!(!line.contains(" >"));
        assert!(line.ends_with(&format_level(&json!("info"))));
    }

    #[test]
    fn test_custom_formatters() {
        fn plain(value: &Value) -> String {
            value.as_str().unwrap_or("?").to_string()
        }
        let formatters = FieldFormatters {
            level: plain,
            field_name: plain,
            timestamp: plain,
        };
        let rec = LogRecord {
            caller: None,
            ..record()
        };
        let line = ConsoleFormat::new().formatters(formatters).render(&rec);
        assert_eq!(line, "2024-03-05T08:20:30.000001Z info deploying attempt2 targetstaging");
    }
}
