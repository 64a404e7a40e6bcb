//! Scoped logger produced by the default factory

use crate::core::{AtomicLogLevel, LeveledLogger, LogLevel, LogRecord, TimestampFormat};
use chrono::Utc;
use colored::Colorize;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Output handle shared between a factory and the loggers it produces.
/// Retargeting a logger swaps its own handle; siblings keep theirs.
pub(crate) type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn shared_writer(writer: impl Write + Send + 'static) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// A logger that writes level-tagged, timestamped lines for one scope.
///
/// Each instance owns its level state: the threshold resolved at
/// construction lives in an [`AtomicLogLevel`] private to this instance,
/// so [`set_level`](Self::set_level) never affects the factory or sibling
/// loggers. The output destination starts as the factory's and can be
/// retargeted per instance with [`set_output`](Self::set_output).
pub struct ScopedLogger {
    scope: String,
    level: AtomicLogLevel,
    writer: RwLock<SharedWriter>,
    timestamps: TimestampFormat,
    use_colors: bool,
}

impl ScopedLogger {
    pub(crate) fn new(
        scope: String,
        level: LogLevel,
        writer: SharedWriter,
        timestamps: TimestampFormat,
        use_colors: bool,
    ) -> Self {
        Self {
            scope,
            level: AtomicLogLevel::new(level),
            writer: RwLock::new(writer),
            timestamps,
            use_colors,
        }
    }

    /// Create a standalone logger for a scope without going through a
    /// factory.
    ///
    /// # Example
    ///
    /// ```
    /// use scoped_logging::prelude::*;
    /// use std::io;
    ///
    /// let logger = ScopedLogger::for_scope("handshake", LogLevel::Warn, io::stderr());
    /// logger.warn("retrying");
    /// ```
    pub fn for_scope(
        scope: &str,
        level: LogLevel,
        writer: impl Write + Send + 'static,
    ) -> Arc<Self> {
        Arc::new(Self::new(
            scope.to_string(),
            level,
            shared_writer(writer),
            TimestampFormat::default(),
            false,
        ))
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Current effective threshold of this instance.
    pub fn level(&self) -> LogLevel {
        self.level.get()
    }

    /// Atomically replace this instance's threshold. Takes effect for the
    /// next call on any thread; no other logger instance is affected.
    pub fn set_level(&self, level: LogLevel) {
        self.level.set(level);
    }

    /// Retarget this instance's output destination. All subsequent calls
    /// on this instance write to `writer`; mainly useful for capturing
    /// output in tests.
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        *self.writer.write() = shared_writer(writer);
    }

    fn write(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        // Hot path: bail before doing any formatting work.
        if level > self.level.get() {
            return;
        }

        let message = LogRecord::sanitize_message(&args.to_string());
        let stamp = self.timestamps.format(&Utc::now());
        let label = if self.use_colors {
            format!("{:5}", level.to_str())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:5}", level.to_str())
        };

        let writer = self.writer.read().clone();
        let mut out = writer.lock();
        // A failed write must not become the caller's problem.
        let _ = writeln!(out, "{} {} [{}] {}", stamp, label, self.scope, message);
    }
}

impl LeveledLogger for ScopedLogger {
    fn trace(&self, msg: &str) {
        self.write(LogLevel::Trace, format_args!("{}", msg));
    }

    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.write(LogLevel::Trace, args);
    }

    fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, format_args!("{}", msg));
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.write(LogLevel::Debug, args);
    }

    fn info(&self, msg: &str) {
        self.write(LogLevel::Info, format_args!("{}", msg));
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.write(LogLevel::Info, args);
    }

    fn warn(&self, msg: &str) {
        self.write(LogLevel::Warn, format_args!("{}", msg));
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.write(LogLevel::Warn, args);
    }

    fn error(&self, msg: &str) {
        self.write(LogLevel::Error, format_args!("{}", msg));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.write(LogLevel::Error, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_carries_scope_and_level() {
        let buf = SharedBuf::default();
        let logger = ScopedLogger::for_scope("codec", LogLevel::Info, buf.clone());

        logger.info("negotiated");

        let out = buf.contents();
        assert!(out.contains("[codec]"));
        assert!(out.contains("Info"));
        assert!(out.contains("negotiated"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_disabled_suppresses_everything() {
        let buf = SharedBuf::default();
        let logger = ScopedLogger::for_scope("mute", LogLevel::Disabled, buf.clone());

        logger.error("dropped");
        logger.errorf(format_args!("dropped {}", 1));

        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_newlines_cannot_forge_records() {
        let buf = SharedBuf::default();
        let logger = ScopedLogger::for_scope("auth", LogLevel::Info, buf.clone());

        logger.info("login\nError [auth] forged");

        let out = buf.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("\\n"));
    }

    #[test]
    fn test_set_output_retargets_this_instance_only() {
        let first = SharedBuf::default();
        let second = SharedBuf::default();
        let logger = ScopedLogger::for_scope("mux", LogLevel::Info, first.clone());

        logger.info("before");
        logger.set_output(second.clone());
        logger.info("after");

        assert!(first.contents().contains("before"));
        assert!(!first.contents().contains("after"));
        assert!(second.contents().contains("after"));
    }
}
