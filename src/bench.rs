use crate::log_message;
use crate::null::NullSink;
use crate::sink::{Sink, SinkExt};
use crate::value::Value;

pub const REQUEST_NAME: &str = "GetUser";
pub const USER_ID: i32 = 123;
pub const ELAPSED_MS: f64 = 45.67;
pub const MESSAGE_TEMPLATE: &str =
    "Handled request {RequestName} for user {UserId} in {ElapsedMs}ms";

log_message! {
    /// Strongly-typed form of the request-handled message. Monomorphized per
    /// sink type, arguments stay on the stack, nothing is formatted unless
    /// the sink is enabled.
    pub fn handled_request(request_name: &str, user_id: i32, elapsed_ms: f64);
    level: Info,
    event: 1,
    message: MESSAGE_TEMPLATE,
}

/// The two measured logging calls, issued with fixed constant arguments
/// against a sink (the no-op sink by default, so neither call has any
/// observable effect and the measurement is the call path itself).
pub struct LogCallBench<S: Sink = NullSink> {
    sink: S,
}

impl LogCallBench<NullSink> {
    pub fn new() -> Self {
        Self { sink: NullSink }
    }
}

impl Default for LogCallBench<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> LogCallBench<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Formatted call. Materializes the argument container (one `Vec`
    /// allocation) and boxes the two primitive arguments before the sink's
    /// disabled check can discard the record: three heap allocations per
    /// call against the no-op sink.
    pub fn formatted(&self) {
        self.sink.info(
            MESSAGE_TEMPLATE,
            vec![
                Value::str(REQUEST_NAME),
                Value::boxed(USER_ID),
                Value::boxed(ELAPSED_MS),
            ],
        );
    }

    /// Typed call. Zero heap allocations per call against the no-op sink.
    pub fn typed(&self) {
        handled_request(&self.sink, REQUEST_NAME, USER_ID, ELAPSED_MS);
    }
}
