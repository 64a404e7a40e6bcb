//! Adapter exposing a [`StructuredSink`] backend through the
//! [`LeveledLogger`]/[`LoggerFactory`] contracts
//!
//! The backend has no notion of a `Trace` level; the adapter emulates one
//! by routing trace calls to the backend's `Debug` severity behind an
//! explicit opt-in flag, rather than inventing a backend level. All other
//! threshold decisions are delegated to the backend untouched.

use crate::core::{Caller, LeveledLogger, LogLevel, LogRecord, LoggerFactory};
use crate::sink::StructuredSink;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Factory producing [`StructuredLogger`]s over a shared backend.
///
/// Every logger ever created is retained in a registry so
/// [`sync_all`](Self::sync_all) can flush them in bulk at process
/// shutdown.
///
/// # Example
///
/// ```
/// use scoped_logging::prelude::*;
/// use std::io;
/// use std::sync::Arc;
///
/// let factory = StructuredLoggerFactory::new(Arc::new(JsonSink::new(io::stdout())))
///     .enable_trace(true);
///
/// let logger = factory.new_logger("transport");
/// logger.trace("emitted at the backend's Debug severity");
///
/// factory.sync_all();
/// ```
pub struct StructuredLoggerFactory {
    sink: Arc<dyn StructuredSink>,
    emit_trace: bool,
    loggers: Mutex<Vec<Arc<StructuredLogger>>>,
}

impl StructuredLoggerFactory {
    pub fn new(sink: Arc<dyn StructuredSink>) -> Self {
        Self {
            sink,
            emit_trace: false,
            loggers: Mutex::new(Vec::new()),
        }
    }

    /// Emit trace calls at the backend's `Debug` severity instead of
    /// dropping them. Off by default.
    #[must_use = "builder methods return a new value"]
    pub fn enable_trace(mut self, enabled: bool) -> Self {
        self.emit_trace = enabled;
        self
    }

    /// Flush every logger this factory has created, in creation order.
    ///
    /// A flush failure on one logger is discarded and does not stop the
    /// remaining flushes. Call once before process exit so buffered
    /// records reach their destination.
    pub fn sync_all(&self) {
        let loggers = self.loggers.lock();
        for logger in loggers.iter() {
            let _ = logger.sink.sync();
        }
    }
}

impl LoggerFactory for StructuredLoggerFactory {
    fn new_logger(&self, scope: &str) -> Arc<dyn LeveledLogger> {
        let logger = Arc::new(StructuredLogger {
            scope: scope.to_string(),
            sink: self.sink.child(scope),
            emit_trace: self.emit_trace,
        });

        self.loggers.lock().push(Arc::clone(&logger));
        logger
    }
}

/// Logger forwarding records to a named child of a structured backend.
///
/// Records are stamped with the logging call site: the
/// `#[track_caller]` chain starts at the [`LeveledLogger`] methods, so
/// attribution skips the adapter's own frames.
pub struct StructuredLogger {
    scope: String,
    sink: Arc<dyn StructuredSink>,
    emit_trace: bool,
}

impl StructuredLogger {
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[track_caller]
    fn append(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let record = LogRecord::new(level, args.to_string()).with_caller(Caller::here());
        // Backend failures stay out of the caller's control flow.
        let _ = self.sink.append(&record);
    }
}

impl LeveledLogger for StructuredLogger {
    #[track_caller]
    fn trace(&self, msg: &str) {
        if self.emit_trace {
            self.append(LogLevel::Debug, format_args!("{}", msg));
        }
    }

    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        if self.emit_trace {
            self.append(LogLevel::Debug, args);
        }
    }

    #[track_caller]
    fn debug(&self, msg: &str) {
        self.append(LogLevel::Debug, format_args!("{}", msg));
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.append(LogLevel::Debug, args);
    }

    #[track_caller]
    fn info(&self, msg: &str) {
        self.append(LogLevel::Info, format_args!("{}", msg));
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.append(LogLevel::Info, args);
    }

    #[track_caller]
    fn warn(&self, msg: &str) {
        self.append(LogLevel::Warn, format_args!("{}", msg));
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.append(LogLevel::Warn, args);
    }

    #[track_caller]
    fn error(&self, msg: &str) {
        self.append(LogLevel::Error, format_args!("{}", msg));
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.append(LogLevel::Error, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Result;

    struct NullSink;

    impl StructuredSink for NullSink {
        fn child(&self, _name: &str) -> Arc<dyn StructuredSink> {
            Arc::new(NullSink)
        }

        fn append(&self, _record: &LogRecord) -> Result<()> {
            Ok(())
        }

        fn sync(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_trace_is_gated_off_by_default() {
        let factory = StructuredLoggerFactory::new(Arc::new(NullSink));
        assert!(!factory.emit_trace);

        let factory = factory.enable_trace(true);
        assert!(factory.emit_trace);
    }

    #[test]
    fn test_registry_grows_per_logger() {
        let factory = StructuredLoggerFactory::new(Arc::new(NullSink));
        let _a = factory.new_logger("a");
        let _b = factory.new_logger("b");

        assert_eq!(factory.loggers.lock().len(), 2);
    }
}
