/// Defines a strongly-typed log call as a free function, the build-time
/// analog of routing arguments through a generic formatting path.
///
/// The generated function checks `enabled` before touching its arguments,
/// carries them as a plain tuple on the stack, and hands the sink a
/// formatter that renders only when some enabled sink asks for text. No part
/// of the call marshals arguments through the heap.
///
/// ```
/// use logcost::{log_message, MemorySink, LevelFilter};
///
/// log_message! {
///     pub fn cache_miss(key: &str, cost_us: u64);
///     level: Warn,
///     event: 2,
///     message: "cache miss for {Key} cost {CostUs}us",
/// }
///
/// let sink = MemorySink::new(LevelFilter::Warn);
/// cache_miss(&sink, "user:123", 87);
/// assert_eq!(sink.messages(), ["cache miss for user:123 cost 87us"]);
/// ```
#[macro_export]
macro_rules! log_message {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),+ $(,)?);
        level: $level:ident,
        event: $id:literal,
        message: $template:expr $(,)?
    ) => {
        $(#[$meta])*
        $vis fn $name<S: $crate::sink::Sink>(sink: &S, $($arg: $ty),+) {
            if !sink.enabled($crate::Level::$level) {
                return;
            }
            sink.log(
                $crate::Level::$level,
                $crate::event::EventId::new($id, stringify!($name)),
                ($($arg,)+),
                None,
                |state, _| {
                    let ($($arg,)+) = state;
                    let args: &[&dyn ::std::fmt::Display] = &[$(&$arg),+];
                    let mut out = ::std::string::String::new();
                    let _ = $crate::template::render($template, args, &mut out);
                    out
                },
            );
        }
    };
}
