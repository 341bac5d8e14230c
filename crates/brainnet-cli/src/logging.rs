//! Tracing subscriber setup.

use brainnet_core::Settings;
use tracing_subscriber::EnvFilter;

/// Filter directive: `RUST_LOG` when set, otherwise the configured level.
pub fn filter_directive(settings: &Settings, verbose: bool) -> String {
    if let Ok(from_env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        return from_env;
    }
    let level = if verbose || settings.debug {
        "debug"
    } else {
        settings.tracing_directive()
    };
    format!("{level},tower_http=info")
}

/// Install the global fmt subscriber. Safe to call once per process.
pub fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(settings, verbose))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}
