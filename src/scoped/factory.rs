//! Scope-aware default factory

use super::logger::{shared_writer, ScopedLogger, SharedWriter};
use crate::core::{LeveledLogger, LogLevel, LoggerFactory, TimestampFormat};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

/// Factory producing [`ScopedLogger`] instances with per-scope level
/// overrides.
///
/// `new_logger(scope)` looks the scope up in the override map; on a hit
/// the produced logger starts at the override level, on a miss at the
/// factory default. Lookup is exact-match only; there is no prefix or
/// hierarchy matching. The override map is read-only after construction,
/// and every produced logger gets its own level cell, so the factory can
/// be shared freely across threads.
///
/// # Example
///
/// ```
/// use scoped_logging::prelude::*;
///
/// let factory = DefaultLoggerFactory::builder()
///     .default_level(LogLevel::Warn)
///     .scope_level("transport", LogLevel::Debug)
///     .build();
///
/// let transport = factory.new_logger("transport");
/// transport.debug("emitted: transport is overridden to Debug");
///
/// let codec = factory.new_logger("codec");
/// codec.debug("suppressed: codec falls back to Warn");
/// ```
pub struct DefaultLoggerFactory {
    default_level: LogLevel,
    scope_levels: HashMap<String, LogLevel>,
    writer: SharedWriter,
    timestamps: TimestampFormat,
    use_colors: bool,
}

impl DefaultLoggerFactory {
    /// Factory with an `Error` default level writing to stderr.
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> DefaultLoggerFactoryBuilder {
        DefaultLoggerFactoryBuilder::new()
    }

    pub fn default_level(&self) -> LogLevel {
        self.default_level
    }

    /// The level a logger for `scope` would start at.
    pub fn resolve_level(&self, scope: &str) -> LogLevel {
        self.scope_levels
            .get(scope)
            .copied()
            .unwrap_or(self.default_level)
    }

    /// Concretely-typed variant of [`LoggerFactory::new_logger`], for
    /// callers that need the [`ScopedLogger`] operations (`set_level`,
    /// `set_output`).
    pub fn scoped_logger(&self, scope: &str) -> Arc<ScopedLogger> {
        Arc::new(ScopedLogger::new(
            scope.to_string(),
            self.resolve_level(scope),
            Arc::clone(&self.writer),
            self.timestamps.clone(),
            self.use_colors,
        ))
    }
}

impl LoggerFactory for DefaultLoggerFactory {
    fn new_logger(&self, scope: &str) -> Arc<dyn LeveledLogger> {
        self.scoped_logger(scope)
    }
}

impl Default for DefaultLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`DefaultLoggerFactory`]
pub struct DefaultLoggerFactoryBuilder {
    default_level: LogLevel,
    scope_levels: HashMap<String, LogLevel>,
    writer: SharedWriter,
    timestamps: TimestampFormat,
    use_colors: bool,
}

impl DefaultLoggerFactoryBuilder {
    pub fn new() -> Self {
        Self {
            default_level: LogLevel::Error,
            scope_levels: HashMap::new(),
            writer: shared_writer(io::stderr()),
            timestamps: TimestampFormat::default(),
            use_colors: false,
        }
    }

    /// Level used for scopes without an override
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    /// Override the starting level for one scope
    #[must_use = "builder methods return a new value"]
    pub fn scope_level(mut self, scope: impl Into<String>, level: LogLevel) -> Self {
        self.scope_levels.insert(scope.into(), level);
        self
    }

    /// Destination shared by all produced loggers
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = shared_writer(writer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamps = format;
        self
    }

    /// Colorize level labels in rendered lines
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn build(self) -> DefaultLoggerFactory {
        DefaultLoggerFactory {
            default_level: self.default_level,
            scope_levels: self.scope_levels,
            writer: self.writer,
            timestamps: self.timestamps,
            use_colors: self.use_colors,
        }
    }
}

impl Default for DefaultLoggerFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
