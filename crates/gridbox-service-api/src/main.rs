//! gridbox Formula 1 race results HTTP service.
//!
//! Proxies two read-only queries to the Ergast API and reshapes the responses
//! for the front-end.
//!
//! # Endpoints
//!
//! - `GET /api/races?year=YYYY` - season calendar as `{round, name}` pairs
//! - `GET /api/results?year=YYYY&round=R` - classified results for one round
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//!
//! # Configuration
//!
//! - `ERGAST_BASE_URL` - upstream base URL (default: https://ergast.com/api/f1)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `UPSTREAM_TIMEOUT_SECS` - outbound call timeout (default: 5)
//! - `ERGAST_ACCEPT_INVALID_CERTS` - skip TLS verification (default: false)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use gridbox_service_api::{init_logging, router, AppConfig, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("api");
    init_logging(&logging_config);

    let config = AppConfig::from_env();
    let port = config.port;

    info!(
        base_url = %config.base_url,
        port,
        timeout_secs = config.timeout.as_secs(),
        accept_invalid_certs = config.accept_invalid_certs,
        "starting gridbox api service"
    );
    if config.accept_invalid_certs {
        tracing::warn!("TLS certificate verification is DISABLED for upstream calls");
    }

    let state = AppState::from_config(config).map_err(|e| {
        error!(error = %e, "failed to build application state");
        e
    })?;

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
