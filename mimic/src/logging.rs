//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Events go to stderr so generated code
/// printed to stdout stays clean.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().without_time().with_writer(std::io::stderr))
            .init();
    }
}
