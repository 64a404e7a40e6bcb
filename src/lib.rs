//! # Scoped Logging
//!
//! A leveled, scope-aware logging facade: components emit messages tagged
//! with a severity level and a named scope, and a pluggable factory
//! decides how they are filtered, formatted, and delivered.
//!
//! ## Features
//!
//! - **Lock-Free Level Checks**: levels live in atomic cells and can be
//!   changed at runtime while other threads are logging
//! - **Per-Scope Overrides**: the default factory resolves each scope's
//!   starting level from a default plus an override map
//! - **Pluggable Backends**: the structured-sink adapter routes records to
//!   any backend implementing the sink capability, with bulk flush
//! - **No Global State**: factories are constructed explicitly and passed
//!   through the program's dependency graph

pub mod adapter;
pub mod core;
pub mod macros;
pub mod scoped;
pub mod sink;

pub mod prelude {
    pub use crate::adapter::{StructuredLogger, StructuredLoggerFactory};
    pub use crate::core::{
        AtomicLogLevel, Caller, FieldValue, LeveledLogger, LogContext, LogLevel, LogRecord,
        LoggerError, LoggerFactory, Result, TimestampFormat,
    };
    pub use crate::scoped::{DefaultLoggerFactory, DefaultLoggerFactoryBuilder, ScopedLogger};
    pub use crate::sink::{JsonSink, StructuredSink};
}

pub use crate::adapter::{StructuredLogger, StructuredLoggerFactory};
pub use crate::core::{
    AtomicLogLevel, Caller, FieldValue, LeveledLogger, LogContext, LogLevel, LogRecord,
    LoggerError, LoggerFactory, Result, TimestampFormat,
};
pub use crate::scoped::{DefaultLoggerFactory, DefaultLoggerFactoryBuilder, ScopedLogger};
pub use crate::sink::{JsonSink, StructuredSink};
