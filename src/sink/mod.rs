//! Structured log sink capability and bundled implementations

pub mod json;

use crate::core::{LogRecord, Result};
use std::sync::Arc;

/// An opaque structured logging backend.
///
/// A sink accepts complete [`LogRecord`]s, supports deriving a named child
/// (the child's name becomes a label on every record appended through it),
/// and can be flushed. Thresholding is the sink's own concern; the adapter
/// in [`crate::adapter`] forwards every record it does not gate itself.
pub trait StructuredSink: Send + Sync {
    /// Derive a child sink carrying `name` as a label. Children of
    /// children compose their labels.
    fn child(&self, name: &str) -> Arc<dyn StructuredSink>;

    /// Accept one record.
    fn append(&self, record: &LogRecord) -> Result<()>;

    /// Flush buffered records to the underlying destination.
    fn sync(&self) -> Result<()>;
}

pub use json::JsonSink;
