//! Error responses for the gridbox API.
//!
//! Every failure surfaces to the caller as `{"error": "<message>"}` with a
//! matching HTTP status. Messages are fixed, non-sensitive strings; the raw
//! cause (decode errors, transport errors) is logged at the handler, never
//! returned to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use gridbox_lib::Error as LibError;

/// Message for a races request without a usable `year`.
pub const MSG_MISSING_YEAR: &str = "Missing year parameter";

/// Message for a results request missing `year` or `round`.
pub const MSG_MISSING_YEAR_OR_ROUND: &str = "Missing year or round parameter";

/// Message when the upstream calendar fetch fails.
pub const MSG_UPSTREAM_RACES: &str = "Failed to fetch data from Ergast API";

/// Message when the upstream results fetch fails.
pub const MSG_UPSTREAM_RESULTS: &str = "Failed to fetch results from Ergast API";

/// Message when upstream returned success but the body did not decode.
pub const MSG_SCHEMA_MISMATCH: &str = "Ergast response did not match the expected shape";

/// The three failure categories the API distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Required query parameter missing or empty; caught before any outbound call.
    Validation,
    /// The outbound call failed, or upstream answered with a non-success status.
    Upstream,
    /// Upstream answered 200 but the payload could not be reshaped.
    Transform,
}

/// An API error: kind, status, and the stable message serialized to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub kind: ApiErrorKind,

    #[serde(skip)]
    pub status: StatusCode,

    /// The `error` field of the response body.
    pub error: String,
}

impl ApiError {
    /// A 400 for a missing or empty required query parameter.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
        }
    }

    /// A 500 for a failed outbound call.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Upstream,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
        }
    }

    /// A 500 for a successful outbound call whose payload could not be reshaped.
    pub fn transform(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transform,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
        }
    }

    pub fn missing_year() -> Self {
        Self::validation(MSG_MISSING_YEAR)
    }

    pub fn missing_year_or_round() -> Self {
        Self::validation(MSG_MISSING_YEAR_OR_ROUND)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.status)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Map a library error onto the API surface.
///
/// Upstream failures get the endpoint's fixed fetch-failure message. Decode
/// failures get a stable schema-mismatch message rather than the underlying
/// serde text. A missing race or missing race date keeps the library message,
/// which names only the requested year and round.
pub fn from_lib_error(error: &LibError, fetch_failed_message: &'static str) -> ApiError {
    match error {
        e if e.is_upstream() => ApiError::upstream(fetch_failed_message),
        LibError::RaceNotFound { .. } | LibError::MissingDate { .. } => {
            ApiError::transform(error.to_string())
        }
        _ => ApiError::transform(MSG_SCHEMA_MISMATCH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_400() {
        let err = ApiError::missing_year();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, MSG_MISSING_YEAR);
    }

    #[test]
    fn serialization_exposes_only_the_error_field() {
        let err = ApiError::upstream(MSG_UPSTREAM_RACES);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Failed to fetch data from Ergast API"})
        );
    }

    #[test]
    fn upstream_status_maps_to_fixed_fetch_message() {
        let lib_err = LibError::UpstreamStatus {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let err = from_lib_error(&lib_err, MSG_UPSTREAM_RESULTS);
        assert_eq!(err.kind, ApiErrorKind::Upstream);
        assert_eq!(err.error, MSG_UPSTREAM_RESULTS);
    }

    #[test]
    fn schema_error_maps_to_stable_message() {
        let lib_err = LibError::Schema {
            message: "invalid type: integer `7`, expected a string at line 3".to_string(),
        };
        let err = from_lib_error(&lib_err, MSG_UPSTREAM_RACES);
        assert_eq!(err.kind, ApiErrorKind::Transform);
        assert_eq!(err.error, MSG_SCHEMA_MISMATCH);
        // The serde detail must not leak to callers.
        assert!(!err.error.contains("line 3"));
    }

    #[test]
    fn race_not_found_keeps_the_library_message() {
        let lib_err = LibError::RaceNotFound {
            year: "2023".to_string(),
            round: "99".to_string(),
        };
        let err = from_lib_error(&lib_err, MSG_UPSTREAM_RESULTS);
        assert_eq!(err.kind, ApiErrorKind::Transform);
        assert!(err.error.contains("2023"));
        assert!(err.error.contains("99"));
    }
}
