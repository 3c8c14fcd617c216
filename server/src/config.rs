//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid AUTH_API_URL (expected http:// or https://): {0}")]
    InvalidUpstream(String),

    #[error("invalid UPSTREAM_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the auth API that owns `/login` and `/signup`.
    pub auth_api_url: Option<String>,
    pub upstream_timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_URL`: auth requests answer 503 when absent
    /// - `UPSTREAM_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("AUTH_API_URL").ok().as_deref(),
            std::env::var("UPSTREAM_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_values(
        port: Option<&str>,
        auth_api_url: Option<&str>,
        upstream_timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let auth_api_url = parse_upstream(auth_api_url)?;
        let timeout_secs = match upstream_timeout_secs {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw.to_owned())),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self { port, auth_api_url, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(raw.to_owned()));
    }
    Ok(Some(raw.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
