//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        tracing::info!(
            default_image_url = %config.default_image_url,
            image_width = config.image_width,
            image_height = config.image_height,
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
        }
    }
}
