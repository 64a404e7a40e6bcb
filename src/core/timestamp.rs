//! Timestamp formatting for rendered log output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used when a record is rendered to text or JSON.
///
/// # Examples
///
/// ```
/// use scoped_logging::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// // "2025-01-08T10:30:45.123Z"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => {
                timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
            }
            TimestampFormat::Rfc3339 => timestamp.to_rfc3339(),
            TimestampFormat::Unix => timestamp.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => timestamp.format(format_str).to_string(),
        }
    }
}
