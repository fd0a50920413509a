//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the admin API and the upstream origin.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Clone is required by Axum; the client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl AppState {
    /// Build the pooled client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the TLS backend cannot be initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, upstream: config.upstream.as_deref().map(Arc::from) })
    }
}
