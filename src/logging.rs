//! Log output setup for binaries. Library code only emits `tracing` events.
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "formflow=info";

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `formflow=info`. Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
