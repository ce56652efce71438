//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Respect `RUST_LOG` when set, fall back to the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is
/// applied to the gateway and tower-http targets.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "edge_gateway={log_level},tower_http={log_level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
