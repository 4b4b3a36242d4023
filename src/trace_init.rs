//! Opt-in JSON tracing for hosts built with the `trace` feature.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "lipi-trace.jsonl";

/// Used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "lipi_core=debug,lipi_engine=debug";

#[cfg(feature = "trace")]
static SUBSCRIBER: Once = Once::new();

/// Route spans and events to `<log_dir>/lipi-trace.jsonl`. Later calls are
/// ignored, whatever directory they name.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    SUBSCRIBER.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // Dropping the guard would stop the writer thread.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
