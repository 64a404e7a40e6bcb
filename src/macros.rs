//! Formatting macros for the `LeveledLogger` f-variants.
//!
//! Each macro builds a [`std::fmt::Arguments`] value with `format_args!`
//! and hands it to the matching trait method, so interpolation is deferred
//! until an implementation actually writes the message. A call below the
//! effective threshold therefore formats nothing.
//!
//! The [`LeveledLogger`](crate::core::LeveledLogger) trait must be in
//! scope at the call site.
//!
//! # Examples
//!
//! ```
//! use scoped_logging::prelude::*;
//! use scoped_logging::{infof, warnf};
//! use std::io;
//!
//! let logger = ScopedLogger::for_scope("server", LogLevel::Info, io::stderr());
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}", port);
//! warnf!(logger, "retry {} of {}", 3, 5);
//! ```

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(::core::format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}
