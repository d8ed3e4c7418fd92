//! Logging - subscriber setup and the application logger handed to handlers

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Logger interface held by `AppState`.
///
/// Built once at startup and shared by reference; handlers never reach for a
/// global logger.
pub trait AppLogger: Send + Sync {
    fn information(&self, message: &str);
    fn warning(&self, message: &str);
    fn debug(&self, message: &str);
    /// Errors are always logged together with their source
    fn error_with(&self, error: &dyn std::error::Error, message: &str);
}

/// Default logger, forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl AppLogger for TracingLogger {
    fn information(&self, message: &str) {
        info!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn error_with(&self, err: &dyn std::error::Error, message: &str) {
        error!(error = %err, "{}", message);
    }
}

/// Installs the global tracing subscriber.
/// `RUST_LOG` wins over the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
