//! Tracing subscriber setup
//!
//! Library crates only emit events through `tracing`; the embedding
//! application decides whether to install a subscriber. This helper installs
//! the JSON subscriber used across the workspace, filtered by `LOG_LEVEL`
//! or `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Env var consulted before `RUST_LOG`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Build the env filter: `LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global JSON subscriber.
///
/// Fails with `Error::Logging` if a global subscriber is already set, so
/// callers that may run more than once (tests) can ignore the result.
pub fn init() -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
