//! Shared setup for the example lexers.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns the first command-line argument, or the given samples.
pub fn inputs(samples: &[&str]) -> Vec<String> {
    match std::env::args().nth(1) {
        Some(input) => vec![input],
        None => samples.iter().map(|s| s.to_string()).collect(),
    }
}
