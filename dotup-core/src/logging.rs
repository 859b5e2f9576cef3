//! Tracing setup for the dotup CLI.
//!
//! Logs go to stderr and stay quiet unless `RUST_LOG` asks for more, so the
//! per-entry report lines on stdout remain clean.

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (e.g. from tests) is a no-op, not a panic.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
