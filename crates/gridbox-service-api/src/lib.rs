//! HTTP surface for the gridbox Formula 1 backend.
//!
//! This crate provides the glue between axum and [`gridbox_lib`]:
//!
//! - [`AppState`]: configuration plus a shared Ergast client, injected into handlers
//! - [`ApiError`]: error responses as `{"error": "..."}` with a matching status
//! - [`handlers`]: the `/api/races` and `/api/results` endpoints
//! - [`health`]: liveness/readiness probes
//! - [`logging`]: structured JSON logging setup
//! - Query types with validation for each endpoint
//!
//! Handlers are thin: parse and validate the query string, make one outbound
//! call through the shared client, project the result, serialize. All envelope
//! handling lives in `gridbox-lib`.

#![deny(warnings)]

pub mod error;
pub mod handlers;
mod health;
pub mod logging;
pub mod middleware;
mod query;
mod state;

pub use error::{
    from_lib_error, ApiError, ApiErrorKind, MSG_MISSING_YEAR, MSG_MISSING_YEAR_OR_ROUND,
    MSG_SCHEMA_MISMATCH, MSG_UPSTREAM_RACES, MSG_UPSTREAM_RESULTS,
};
pub use handlers::router;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use query::{RacesQuery, ResultsQuery};
pub use state::{AppConfig, AppState};
