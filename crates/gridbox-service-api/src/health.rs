//! Health check handlers for liveness/readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// Configured upstream base URL (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            upstream: None,
        }
    }

    pub fn ready(service: &str, version: &str, upstream: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            upstream: Some(upstream.to_string()),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            upstream: None,
        }
    }
}

/// Liveness probe: 200 if the process is up. No external dependencies.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe: 200 when the service has a usable upstream configuration.
///
/// The upstream itself is not probed; every request re-fetches from Ergast,
/// so an upstream outage surfaces per-request rather than flipping readiness.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let base_url = &state.config().base_url;
    if base_url.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no upstream base URL configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, base_url);
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_status_is_ok() {
        let status = HealthStatus::alive("gridbox-service-api", "0.1.0");
        assert_eq!(status.status, "ok");
        assert!(status.upstream.is_none());
    }

    #[test]
    fn ready_status_names_the_upstream() {
        let status = HealthStatus::ready("gridbox-service-api", "0.1.0", "https://ergast.com/api/f1");
        assert_eq!(status.status, "ok");
        assert_eq!(status.upstream.as_deref(), Some("https://ergast.com/api/f1"));
    }

    #[test]
    fn not_ready_carries_the_reason() {
        let status = HealthStatus::not_ready("gridbox-service-api", "0.1.0", "no upstream");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no upstream"));
    }

    #[test]
    fn alive_serialization_omits_upstream() {
        let status = HealthStatus::alive("gridbox-service-api", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("upstream"));
    }
}
