//! # Logging Setup
//!
//! Installs the global tracing subscriber. Debug mode prints human-readable
//! ANSI logs; otherwise every event is emitted as one JSON line.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const DEBUG_FILTER: &str = "marquee=debug,tower_http=debug";
const DEFAULT_FILTER: &str = "marquee=info,tower_http=info";

/// Builds the log filter: `RUST_LOG` if set, otherwise a default depending on
/// debug mode.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    let fallback = if config.debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    };

    config
        .log_filter
        .as_deref()
        .and_then(|filter| EnvFilter::try_new(filter).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Initializes the global subscriber. Must be called once, before serving.
pub fn init_tracing(config: &AppConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.debug {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}
