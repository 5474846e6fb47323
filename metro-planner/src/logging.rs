//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].
fn env_filter() -> EnvFilter {
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    EnvFilter::try_new(&rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            DEFAULT_LEVEL,
            err,
        );
        EnvFilter::new(DEFAULT_LEVEL.to_string())
    })
}

/// Install the global subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter())
        .try_init()
}
