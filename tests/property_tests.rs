//! Property-based tests for scoped_logging using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use scoped_logging::prelude::*;
use std::io::Write;
use std::sync::Arc;

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

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Disabled),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn call_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

fn emit_plain(logger: &ScopedLogger, level: LogLevel, msg: &str) {
    match level {
        LogLevel::Trace => logger.trace(msg),
        LogLevel::Debug => logger.debug(msg),
        LogLevel::Info => logger.info(msg),
        LogLevel::Warn => logger.warn(msg),
        LogLevel::Error => logger.error(msg),
        LogLevel::Disabled => unreachable!("no call exists at Disabled"),
    }
}

fn emit_formatted(logger: &ScopedLogger, level: LogLevel, msg: &str) {
    match level {
        LogLevel::Trace => logger.tracef(format_args!("{}", msg)),
        LogLevel::Debug => logger.debugf(format_args!("{}", msg)),
        LogLevel::Info => logger.infof(format_args!("{}", msg)),
        LogLevel::Warn => logger.warnf(format_args!("{}", msg)),
        LogLevel::Error => logger.errorf(format_args!("{}", msg)),
        LogLevel::Disabled => unreachable!("no call exists at Disabled"),
    }
}

proptest! {
    /// A call at level L produces output iff L <= T, for both the plain
    /// and the formatted variant.
    #[test]
    fn prop_emit_iff_at_or_above_threshold(
        level in call_level(),
        threshold in any_level(),
    ) {
        let out = SharedBuf::default();
        let logger = ScopedLogger::for_scope("prop", threshold, out.clone());

        emit_plain(&logger, level, "plain probe");
        emit_formatted(&logger, level, "formatted probe");

        let emitted = !out.contents().is_empty();
        prop_assert_eq!(emitted, level <= threshold);
        if emitted {
            prop_assert_eq!(out.contents().lines().count(), 2);
        }
    }

    /// Changing a logger's level at runtime changes only that logger's
    /// subsequent filtering.
    #[test]
    fn prop_set_level_rebinds_filtering(
        initial in any_level(),
        updated in any_level(),
        level in call_level(),
    ) {
        let out = SharedBuf::default();
        let logger = ScopedLogger::for_scope("prop", initial, out.clone());

        logger.set_level(updated);
        emit_plain(&logger, level, "probe");

        prop_assert_eq!(!out.contents().is_empty(), level <= updated);
    }

    /// Messages cannot span lines in the rendered output, whatever the
    /// input contains.
    #[test]
    fn prop_one_call_one_line(msg in "(?s).*") {
        let out = SharedBuf::default();
        let logger = ScopedLogger::for_scope("prop", LogLevel::Info, out.clone());

        logger.info(&msg);

        prop_assert_eq!(out.contents().lines().count(), 1);
    }

    /// Raw values outside the defined range render as UNKNOWN.
    #[test]
    fn prop_name_of_out_of_range(raw in any::<i32>()) {
        let name = LogLevel::name_of(raw);
        if (0..=5).contains(&raw) {
            prop_assert_ne!(name, "UNKNOWN");
        } else {
            prop_assert_eq!(name, "UNKNOWN");
        }
    }

    /// Labels round-trip through FromStr regardless of case.
    #[test]
    fn prop_label_roundtrip(level in any_level(), uppercase in any::<bool>()) {
        let label = if uppercase {
            level.to_str().to_uppercase()
        } else {
            level.to_str().to_lowercase()
        };

        prop_assert_eq!(label.parse::<LogLevel>().unwrap(), level);
    }
}

#[test]
fn test_labels_are_exact() {
    let expected = [
        (LogLevel::Disabled, "Disabled"),
        (LogLevel::Error, "Error"),
        (LogLevel::Warn, "Warn"),
        (LogLevel::Info, "Info"),
        (LogLevel::Debug, "Debug"),
        (LogLevel::Trace, "Trace"),
    ];

    for (level, label) in expected {
        assert_eq!(level.to_str(), label);
        assert_eq!(level.to_string(), label);
    }
}
