//! Structured log sinks.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use serde_json::Value;

/// A structured record: field name to JSON value, ordered by field name.
pub type Record = BTreeMap<String, Value>;

/// Destination for structured log records.
pub trait LogSink: Send + Sync {
    /// Emit `record` with a human-readable `message`.
    fn log(&self, record: &Record, message: &str);
}

/// Sink that forwards records to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &Record, message: &str) {
        let fields = serde_json::to_string(record).unwrap_or_default();
        tracing::warn!(record = %fields, "{message}");
    }
}

/// Sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Record, String)>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    #[must_use]
    pub fn entries(&self) -> Vec<(Record, String)> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for RecordingSink {
    fn log(&self, record: &Record, message: &str) {
        self.entries.lock().push((record.clone(), message.to_string()));
    }
}
