//! Test utilities for pdeps
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration tests under `tests/`.
//!
//! - [`init_test_logging`] wires `tracing` output into the test harness.
//! - [`capture_logs`] records the log lines emitted by a closure.
//! - [`ArtifactBuilder`] builds resolved artifacts with sensible defaults.
//! - [`GraphFixture`] provides ready-made resolved-graph documents.

pub mod builder;
pub mod fixtures;

pub use builder::ArtifactBuilder;
pub use fixtures::GraphFixture;

use std::io;
use std::sync::{Arc, Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `Some(level)` that level is used;
/// otherwise `RUST_LOG` is honoured when set and logging stays off when not.
///
/// ```bash
/// RUST_LOG=pdeps_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Shared in-memory sink for [`capture_logs`].
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().map_err(|_| io::Error::other("log buffer poisoned"))?.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
///
/// Lines use the plain `fmt` layout without colours, e.g.
/// `WARN Unsupported filter scope`.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
