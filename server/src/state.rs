//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the auth upstream and that upstream's
//! base URL.

use std::sync::Arc;

use crate::config::{ConfigError, HostConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub auth_api_url: Option<Arc<str>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, auth_api_url: config.auth_api_url.as_deref().map(Arc::from) })
    }
}
