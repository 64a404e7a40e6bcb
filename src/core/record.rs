//! Record structure handed to structured sinks

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Call-site metadata attached to a record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    /// Capture the location of the nearest `#[track_caller]` caller.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single log record as accepted by a structured sink: severity, message,
/// timestamp, and optionally the call site and structured fields. The
/// scope label is not part of the record; it is carried by the named sink
/// child the record is appended to.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<LogContext>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a message cannot masquerade as additional records.
    pub(crate) fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            caller: None,
            fields: None,
        }
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: LogContext) -> Self {
        self.fields = Some(fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_sanitized() {
        let record = LogRecord::new(LogLevel::Info, "line one\nline two\tend");
        assert_eq!(record.message, "line one\\nline two\\tend");
        assert!(!record.message.contains('\n'));
    }

    #[test]
    fn test_caller_capture() {
        let caller = Caller::here();
        assert!(caller.file.ends_with("record.rs"));
        assert!(caller.line > 0);
        assert!(caller.to_string().contains("record.rs:"));
    }

    #[test]
    fn test_with_fields() {
        let record = LogRecord::new(LogLevel::Debug, "probe")
            .with_fields(LogContext::new().with_field("attempt", 2));

        let fields = record.fields.expect("fields attached");
        assert_eq!(fields.len(), 1);
    }
}
