use crate::event::EventId;
use crate::value::{FormattedValues, Value};
use log::Level;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Renders a log state into its final message text. Sinks that are disabled
/// for the record's level must never invoke this.
pub type Formatter<T> = fn(&T, Option<&(dyn Error + 'static)>) -> String;

/// Terminal consumer of log records.
///
/// The methods are generic over the state type rather than taking a trait
/// object, so call sites monomorphize and a typed call can reach the sink
/// without marshaling its arguments through the heap.
pub trait Sink {
    /// Whether records at `level` would be consumed at all.
    fn enabled(&self, level: Level) -> bool;

    /// Opens a logical logging context. Dropping the returned handle closes
    /// it; for sinks without scope support this is a no-op.
    fn begin_scope<T: fmt::Display>(&self, state: T) -> Scope;

    /// Consumes one record. `formatter` turns `state` into the final message
    /// text and is only invoked by sinks that are enabled for `level`.
    fn log<T>(
        &self,
        level: Level,
        event: EventId,
        state: T,
        error: Option<&(dyn Error + 'static)>,
        formatter: Formatter<T>,
    );
}

/// Opaque handle to a logging context. All handles produced by scope-less
/// sinks refer to one process-wide token; releasing a handle is a no-op.
#[derive(Clone)]
pub struct Scope {
    token: Arc<ScopeToken>,
}

struct ScopeToken;

impl Scope {
    /// Handle to the shared token. The token is initialized on first use;
    /// every later call is a refcount bump with no allocation.
    pub fn shared() -> Scope {
        static TOKEN: OnceLock<Arc<ScopeToken>> = OnceLock::new();
        Scope {
            token: Arc::clone(TOKEN.get_or_init(|| Arc::new(ScopeToken))),
        }
    }

    pub fn shares_token(&self, other: &Scope) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
    }
}

/// Formatted-call convenience layer over [`Sink`].
///
/// These wrappers build the loosely-typed [`FormattedValues`] state
/// unconditionally, before the sink gets a chance to discard the record.
/// The container and boxing allocations therefore happen even when the sink
/// is disabled, which is the cost the benchmark puts a number on.
pub trait SinkExt: Sink {
    fn log_formatted<'a>(&self, level: Level, template: &'a str, values: Vec<Value<'a>>) {
        self.log(
            level,
            EventId::default(),
            FormattedValues::new(template, values),
            None,
            format_values,
        );
    }

    fn info<'a>(&self, template: &'a str, values: Vec<Value<'a>>) {
        self.log_formatted(Level::Info, template, values);
    }
}

impl<S: Sink + ?Sized> SinkExt for S {}

fn format_values(state: &FormattedValues<'_>, _error: Option<&(dyn Error + 'static)>) -> String {
    state.to_string()
}
