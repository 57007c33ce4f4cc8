#[cfg(test)]
mod test {
    use log::{Level, LevelFilter};
    use logcost::{
        EventId, LogCallBench, MemorySink, NullSink, Scope, Sink, SinkExt, Value,
        ELAPSED_MS, MESSAGE_TEMPLATE, REQUEST_NAME, USER_ID,
    };
    use std::error::Error;

    const RENDERED: &str = "Handled request GetUser for user 123 in 45.67ms";

    fn must_not_format<T>(_state: &T, _error: Option<&(dyn Error + 'static)>) -> String {
        panic!("formatter invoked on a disabled sink");
    }

    #[test]
    fn null_sink_disabled_for_every_level() {
        for level in Level::iter() {
            assert!(!NullSink.enabled(level), "{} must be disabled", level);
        }
    }

    #[test]
    fn null_sink_never_invokes_formatter() {
        for level in Level::iter() {
            NullSink.log(level, EventId::new(7, "probe"), (), None, must_not_format);
        }
    }

    #[test]
    fn null_scopes_share_one_token() {
        let a = NullSink.begin_scope("request 1");
        let b = NullSink.begin_scope(42);
        let c = Scope::shared();
        assert!(a.shares_token(&b));
        assert!(b.shares_token(&c));
        drop(a);
        drop(b);
        // the token survives released handles
        assert!(c.shares_token(&Scope::shared()));
    }

    #[test]
    fn formatted_call_has_no_effect_on_null_sink() {
        let bench = LogCallBench::new();
        for _ in 0..1000 {
            bench.formatted();
            bench.typed();
        }
    }

    #[test]
    fn both_paths_render_identically_when_enabled() {
        let bench = LogCallBench::with_sink(MemorySink::new(LevelFilter::Info));
        bench.formatted();
        bench.typed();
        assert_eq!(bench.sink().messages(), [RENDERED, RENDERED]);
        let records = bench.sink().records();
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].event, EventId::default());
        assert_eq!(records[1].event, EventId::new(1, "handled_request"));
    }

    #[test]
    fn disabled_filter_captures_nothing_from_either_path() {
        let bench = LogCallBench::with_sink(MemorySink::new(LevelFilter::Off));
        bench.formatted();
        bench.typed();
        assert!(bench.sink().is_empty());
    }

    #[test]
    fn repeated_calls_capture_identical_records() {
        let bench = LogCallBench::with_sink(MemorySink::new(LevelFilter::Info));
        for _ in 0..100 {
            bench.typed();
        }
        let messages = bench.sink().messages();
        assert_eq!(messages.len(), 100);
        assert!(messages.iter().all(|m| m == RENDERED));
    }

    #[test]
    fn formatted_state_carries_constants() {
        let sink = MemorySink::new(LevelFilter::Info);
        sink.info(
            MESSAGE_TEMPLATE,
            vec![
                Value::str(REQUEST_NAME),
                Value::boxed(USER_ID),
                Value::boxed(ELAPSED_MS),
            ],
        );
        assert_eq!(sink.messages(), [RENDERED]);
    }
}
