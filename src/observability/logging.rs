//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber once at startup
//! - Pick the filter from `RUST_LOG`, falling back to config
//!
//! # Design Decisions
//! - Compact human format without ANSI colour so output stays pasteable
//! - Writer is stderr so replies on stdout stay clean

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the log filter: `RUST_LOG` if set and valid, else `header_echo=<level>`.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("header_echo={}", config.log_level).into())
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &ObservabilityConfig) {
    let result = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
