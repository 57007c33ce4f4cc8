use crate::event::EventId;
use crate::sink::{Formatter, Scope, Sink};
use log::Level;
use std::error::Error;
use std::fmt;

/// Sink that drops every record without formatting or I/O.
///
/// Reports itself disabled for every level, so measuring a call against it
/// isolates the cost of the call path from the cost of consuming the record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn begin_scope<T: fmt::Display>(&self, _state: T) -> Scope {
        Scope::shared()
    }

    fn log<T>(
        &self,
        _level: Level,
        _event: EventId,
        _state: T,
        _error: Option<&(dyn Error + 'static)>,
        _formatter: Formatter<T>,
    ) {
    }
}
