//! Logging init: stderr subscriber with `RUST_LOG` filtering.
//!
//! Logs share stderr with error diagnostics; stdout stays reserved for
//! matched URLs. Default level is `warn` so recoverable row skips are
//! visible without drowning a normal run in output.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
