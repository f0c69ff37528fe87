pub mod chat;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod metrics;
pub mod pricing;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging with the default level and plain text output
///
/// Note: This function can only be called once. The start command calls
/// `init_tracing_with` instead, once the configuration is loaded.
pub fn init_tracing() {
    init_tracing_with("info", "text");
}

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over `default_level`. `format` is either "text" or "json".
pub fn init_tracing_with(default_level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
