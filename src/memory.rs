use crate::event::EventId;
use crate::sink::{Formatter, Scope, Sink};
use log::{Level, LevelFilter};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt;

/// Record captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub event: EventId,
    pub message: String,
}

/// Sink that renders records at or below a level filter into memory.
///
/// This is the observable counterpart of [`NullSink`](crate::NullSink):
/// tests use it to check that enabled sinks do invoke the formatter and
/// that both call paths render the same text.
pub struct MemorySink {
    max_level: LevelFilter,
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    pub fn new(max_level: LevelFilter) -> Self {
        Self {
            max_level,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    fn begin_scope<T: fmt::Display>(&self, _state: T) -> Scope {
        Scope::shared()
    }

    fn log<T>(
        &self,
        level: Level,
        event: EventId,
        state: T,
        error: Option<&(dyn Error + 'static)>,
        formatter: Formatter<T>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let message = formatter(&state, error);
        self.records.lock().push(CapturedRecord {
            level,
            event,
            message,
        });
    }
}
