//! Logging setup
//!
//! Thin helper around `tracing-subscriber` for binaries and tests that
//! want output. Library code only emits `tracing` events and never
//! installs a subscriber itself.

use tracing_subscriber::EnvFilter;

/// Install a global subscriber honoring `RUST_LOG`
///
/// Falls back to the given default filter when `RUST_LOG` is unset.
/// Calling this twice is harmless; the second call is a no-op.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
