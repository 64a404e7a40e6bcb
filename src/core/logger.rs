//! Capability contracts for leveled, scoped logging
//!
//! `LeveledLogger` is the surface components log against; `LoggerFactory`
//! produces one logger per logical scope. Concrete implementations own
//! their level state and output destination, so the contracts here mandate
//! no shared mutable fields.

use std::fmt;
use std::sync::Arc;

/// A logger emitting at five severity levels, each with a plain and a
/// formatted variant.
///
/// A plain method emits its message verbatim iff the method's level is at
/// or above the implementation's effective threshold. A formatted variant
/// takes [`fmt::Arguments`], which defers interpolation until the message
/// is actually written, so a filtered call performs no formatting work.
/// The [`tracef!`](crate::tracef)..[`errorf!`](crate::errorf) macros build
/// the `Arguments` value from `println!`-style input.
///
/// No method returns an error or panics: emission failures are the
/// implementation's to swallow, never the caller's to handle.
///
/// The methods are `#[track_caller]` so implementations that record call
/// sites attribute them to the logging call site rather than to the
/// facade's own frames.
pub trait LeveledLogger: Send + Sync {
    #[track_caller]
    fn trace(&self, msg: &str);
    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn debug(&self, msg: &str);
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn info(&self, msg: &str);
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn warn(&self, msg: &str);
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn error(&self, msg: &str);
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);
}

/// Produces a [`LeveledLogger`] for a named scope.
///
/// One factory instance is expected to live for the process lifetime and
/// be handed to every component that needs logging (constructor injection;
/// this crate deliberately has no process-wide singleton). Components call
/// `new_logger` once and keep the returned handle.
pub trait LoggerFactory: Send + Sync {
    fn new_logger(&self, scope: &str) -> Arc<dyn LeveledLogger>;
}
