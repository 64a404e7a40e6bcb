//! JSON-lines structured sink

use super::StructuredSink;
use crate::core::{LogRecord, Result, TimestampFormat};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::Arc;

/// A [`StructuredSink`] writing each record as a single-line JSON object
/// (JSONL), compatible with log aggregation tools like ELK and Loki.
///
/// Children share the parent's destination; their names are dot-joined
/// into the `logger` field of every record they append.
///
/// # Example
///
/// ```
/// use scoped_logging::prelude::*;
/// use std::io;
///
/// let sink = JsonSink::new(io::stdout());
/// let child = sink.child("transport");
/// child.append(&LogRecord::new(LogLevel::Info, "connected")).unwrap();
/// // {"ts":"...","level":"Info","logger":"transport","msg":"connected"}
/// ```
pub struct JsonSink {
    name: String,
    timestamps: TimestampFormat,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl JsonSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            name: String::new(),
            timestamps: TimestampFormat::default(),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Set the format of the `ts` field
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamps = format;
        self
    }

    /// Label this sink attaches to records; empty at the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, record: &LogRecord) -> Result<String> {
        let mut object = Map::new();
        object.insert(
            "ts".to_string(),
            Value::String(self.timestamps.format(&record.timestamp)),
        );
        object.insert(
            "level".to_string(),
            Value::String(record.level.to_str().to_string()),
        );
        if !self.name.is_empty() {
            object.insert("logger".to_string(), Value::String(self.name.clone()));
        }
        object.insert("msg".to_string(), Value::String(record.message.clone()));
        if let Some(caller) = &record.caller {
            object.insert("caller".to_string(), Value::String(caller.to_string()));
        }
        if let Some(fields) = &record.fields {
            for (key, value) in fields.iter() {
                object.insert(key.clone(), value.to_json_value());
            }
        }

        Ok(serde_json::to_string(&Value::Object(object))?)
    }
}

impl StructuredSink for JsonSink {
    fn child(&self, name: &str) -> Arc<dyn StructuredSink> {
        let name = if self.name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.name, name)
        };

        Arc::new(JsonSink {
            name,
            timestamps: self.timestamps.clone(),
            writer: Arc::clone(&self.writer),
        })
    }

    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = self.render(record)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
