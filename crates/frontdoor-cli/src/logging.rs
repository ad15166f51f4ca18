//! Tracing setup for the CLI.
//!
//! Events go to stderr so `--format json` output on stdout stays parseable.
//! `RUST_LOG` takes precedence over `--log-level` when set.

use crate::types::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    // A second init (e.g. from tests driving `run` twice) is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn default_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,frontdoor_runtime={level},frontdoor_cli={level}"
    ))
}
