//! `tracing` subscriber setup.
//!
//! Logs go to stderr through a non-blocking writer so stdout stays clean
//! for command output (entries JSON, reports, generated passwords).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: our crates at `level`, the rest at warn.
#[must_use]
pub fn default_directive(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    format!("securevault={level},warn")
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole program.
pub fn init(level: &str, verbose: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level, verbose)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_thread_names(false)
        .try_init()
    {
        eprintln!("securevault: logging disabled: {e}");
    }

    guard
}
