//! Handlers for the two API endpoints and the router wiring them up.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use gridbox_lib::{flatten_results, summarize_races, RaceSummary, ResultRow};

use crate::error::{from_lib_error, ApiError, MSG_UPSTREAM_RACES, MSG_UPSTREAM_RESULTS};
use crate::health::{health_live, health_ready};
use crate::middleware::extract_or_generate_request_id;
use crate::query::{RacesQuery, ResultsQuery};
use crate::state::AppState;

/// Build the service router: the two API endpoints, health probes, request
/// tracing, and permissive CORS on all routes (the front-end is served from
/// a different origin).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/races", get(get_races))
        .route("/api/results", get(get_results))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle `GET /api/races?year=YYYY`.
///
/// Returns the season calendar projected to `{round, name}`, in upstream order.
pub async fn get_races(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RacesQuery>,
) -> Result<Json<Vec<RaceSummary>>, ApiError> {
    let request_id = extract_or_generate_request_id(&headers);
    let year = query.year().map_err(|e| *e)?;

    info!(request_id = %request_id, year, "handling races request");

    let races = state.ergast().season_races(year).await.map_err(|e| {
        error!(request_id = %request_id, year, error = %e, "season lookup failed");
        from_lib_error(&e, MSG_UPSTREAM_RACES)
    })?;

    let summaries = summarize_races(races);

    info!(
        request_id = %request_id,
        year,
        races = summaries.len(),
        "races request served"
    );

    Ok(Json(summaries))
}

/// Handle `GET /api/results?year=YYYY&round=R`.
///
/// Returns one row per classified entry, each carrying the race-level name,
/// round and date, in upstream order.
pub async fn get_results(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Vec<ResultRow>>, ApiError> {
    let request_id = extract_or_generate_request_id(&headers);
    let (year, round) = query.params().map_err(|e| *e)?;

    info!(request_id = %request_id, year, round, "handling results request");

    let race = state
        .ergast()
        .round_results(year, round)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, year, round, error = %e, "results lookup failed");
            from_lib_error(&e, MSG_UPSTREAM_RESULTS)
        })?;

    let rows = flatten_results(race, year, round).map_err(|e| {
        error!(request_id = %request_id, year, round, error = %e, "results reshape failed");
        from_lib_error(&e, MSG_UPSTREAM_RESULTS)
    })?;

    info!(
        request_id = %request_id,
        year,
        round,
        rows = rows.len(),
        "results request served"
    );

    Ok(Json(rows))
}
