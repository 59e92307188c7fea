//! Application configuration and shared state.
//!
//! Configuration is read once at startup and injected into handlers through
//! axum's `State` extractor; there are no process-global singletons.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use gridbox_lib::{ClientConfig, ErgastClient, Result as LibResult, DEFAULT_BASE_URL};

/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream Ergast base URL.
    pub base_url: String,
    /// Port to listen on.
    pub port: u16,
    /// Timeout for each outbound call.
    pub timeout: Duration,
    /// Skip TLS verification on outbound calls. Secure (off) by default;
    /// only for deployments behind a certificate-rewriting proxy.
    pub accept_invalid_certs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            timeout: gridbox_lib::DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// - `ERGAST_BASE_URL`: upstream base URL (default `https://ergast.com/api/f1`)
    /// - `SERVICE_PORT`: listen port (default 8080)
    /// - `UPSTREAM_TIMEOUT_SECS`: outbound call timeout in seconds (default 5)
    /// - `ERGAST_ACCEPT_INVALID_CERTS`: "true"/"1" to skip TLS verification
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("ERGAST_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);

        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let timeout = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let accept_invalid_certs = env::var("ERGAST_ACCEPT_INVALID_CERTS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            base_url,
            port,
            timeout,
            accept_invalid_certs,
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; the Ergast client and configuration live behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    ergast: ErgastClient,
}

impl AppState {
    /// Build state from configuration, constructing the shared Ergast client.
    pub fn from_config(config: AppConfig) -> LibResult<Self> {
        let ergast = ErgastClient::new(&ClientConfig {
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            accept_invalid_certs: config.accept_invalid_certs,
        })?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, ergast }),
        })
    }

    /// Access the shared Ergast client.
    pub fn ergast(&self) -> &ErgastClient {
        &self.inner.ergast
    }

    /// Access the service configuration.
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_url", &self.inner.config.base_url)
            .field("timeout", &self.inner.config.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_ergast() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn state_is_cheap_to_clone() {
        let state = AppState::from_config(AppConfig::default()).unwrap();
        let clone = state.clone();
        assert_eq!(state.config().base_url, clone.config().base_url);
    }

    #[test]
    fn state_debug_names_the_upstream() {
        let state = AppState::from_config(AppConfig::default()).unwrap();
        let debug = format!("{:?}", state);
        assert!(debug.contains("AppState"));
        assert!(debug.contains("ergast.com"));
    }
}
