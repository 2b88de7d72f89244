//! Structured logging setup
//!
//! Thin wrapper over tracing-subscriber. `RUST_LOG` always wins; the level
//! argument is only the fallback filter.
//!
//! ```bash
//! RUST_LOG=loss_core=trace loss-sim run ...
//! ```

use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging at the default `info` level.
pub fn init_logging() {
    init_logging_with_level("info");
}

/// Initialize logging with a specific fallback level
/// ("trace", "debug", "info", "warn", or "error").
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("loss_core={level},loss_metrics={level},loss_cli={level}").into()
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .init();

    info!("logging initialized at level: {}", level);
}
