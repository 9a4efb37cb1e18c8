//! Development-time tracing for debugging the launcher.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. The status lines
//! printed to stdout (missing data file, dashboard starting) are product
//! output and are unaffected by it.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, skipping directives that fail to parse. Defaults to `warn`.
///
/// # Example
/// ```bash
/// RUST_LOG=finops_launcher=debug ./finops-launcher
/// ```
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
