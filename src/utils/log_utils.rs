// src/utils/log_utils.rs
use tracing_subscriber::EnvFilter;

/// Build the log filter, preferring `RUST_LOG` over the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber. Log lines go to stderr so they
/// never mix with command output.
pub fn init_logging(default_level: &str) {
    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .try_init();
}
