//! Log level definitions and the atomic level cell

use crate::core::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};

/// Severity threshold for leveled loggers.
///
/// The ordering is by verbosity: a logger whose threshold is `T` emits a
/// call at level `L` iff `L <= T`. `Disabled` as a threshold suppresses
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Completely disables logging of any events
    Disabled = 0,
    /// Fatal errors which should be handled by caller code, but are logged
    /// to ensure that they are seen
    Error = 1,
    /// Abnormal, but non-fatal operation
    Warn = 2,
    /// Normal operation (state transitions, lifecycle events)
    Info = 3,
    /// Low-level internal operations
    Debug = 4,
    /// Very low-level information such as wire traces
    Trace = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Disabled => "Disabled",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Recover a level from its raw stored representation.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Disabled),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Debug),
            5 => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Label for a raw stored value; values outside the defined range
    /// render as `"UNKNOWN"`.
    pub fn name_of(raw: i32) -> &'static str {
        match Self::from_raw(raw) {
            Some(level) => level.to_str(),
            None => "UNKNOWN",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Disabled => BrightBlack,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DISABLED" | "DISABLE" | "OFF" => Ok(LogLevel::Disabled),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Lock-free cell holding a [`LogLevel`].
///
/// Level checks sit on the hot path of every log call and the level may be
/// changed at runtime while other threads are logging, so the value is kept
/// in a 32-bit atomic rather than behind a mutex. `set` uses a release
/// store and `get` an acquire load.
#[derive(Debug)]
pub struct AtomicLogLevel(AtomicI32);

impl AtomicLogLevel {
    pub const fn new(level: LogLevel) -> Self {
        Self(AtomicI32::new(level as i32))
    }

    /// Atomically replace the stored level. Always succeeds; subsequent
    /// `get` calls on any thread observe the new value.
    #[inline]
    pub fn set(&self, level: LogLevel) {
        self.0.store(level as i32, Ordering::Release);
    }

    /// Atomically load the current level.
    #[inline]
    pub fn get(&self) -> LogLevel {
        // Only `set` writes this cell, so the raw value is always in range.
        LogLevel::from_raw(self.0.load(Ordering::Acquire)).unwrap_or(LogLevel::Disabled)
    }
}

impl Default for AtomicLogLevel {
    fn default() -> Self {
        Self::new(LogLevel::Error)
    }
}
