//! Optional JSON trace log.

use std::path::Path;

/// Keeps the background log writer alive. Dropping it flushes the lines
/// still queued, so `main` holds it until the command returns.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Send trace events to `kanatype-trace.jsonl` in `log_dir`. The game draws
/// on stdout, so nothing goes there. Only the first call installs a
/// subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let appender = tracing_appender::rolling::never(log_dir, "kanatype-trace.jsonl");
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kana_core=debug,kana_session=debug,kana_cli=debug"));
    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    TraceGuard {
        _worker: installed.then_some(worker),
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard {}
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[test]
    fn test_events_flushed_when_guard_drops() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init_tracing(dir.path());
        tracing::info!(deck = "Test", "starting game");
        drop(guard);

        let log = std::fs::read_to_string(dir.path().join("kanatype-trace.jsonl")).unwrap();
        assert!(log.contains("starting game"), "log was: {log:?}");

        // A second call leaves the first subscriber in place.
        let _again = init_tracing(dir.path());
    }
}
