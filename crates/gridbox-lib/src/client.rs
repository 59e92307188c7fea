//! Async HTTP client for the Ergast API.
//!
//! One outbound GET per call, with an explicit timeout. TLS verification is
//! on by default; deployments behind an intercepting proxy can opt out via
//! [`ClientConfig::accept_invalid_certs`].

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Envelope, Race};

/// Default Ergast base URL; path-parameterized by year (and round).
pub const DEFAULT_BASE_URL: &str = "https://ergast.com/api/f1";

/// Default outbound call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the Ergast HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each outbound call.
    pub timeout: Duration,
    /// Skip TLS certificate verification on outbound calls. Off by default.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at a non-default base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Typed client for the Ergast API. Cheaply cloneable.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
}

impl ErgastClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the race calendar for a season via `{base}/{year}.json`.
    ///
    /// Returns the races in upstream order; an unknown season comes back as
    /// an empty list rather than an error, matching Ergast behavior.
    pub async fn season_races(&self, year: &str) -> Result<Vec<Race>> {
        let url = format!("{}/{}.json", self.base_url, year);
        let envelope = self.fetch(&url).await?;
        Ok(envelope.mr_data.race_table.races)
    }

    /// Fetch the classified results for one round via
    /// `{base}/{year}/{round}/results.json`.
    ///
    /// Ergast returns at most one race for this query; an empty race table
    /// means the round does not exist and maps to [`Error::RaceNotFound`].
    pub async fn round_results(&self, year: &str, round: &str) -> Result<Race> {
        let url = format!("{}/{}/{}/results.json", self.base_url, year, round);
        let envelope = self.fetch(&url).await?;
        envelope
            .mr_data
            .race_table
            .races
            .into_iter()
            .next()
            .ok_or_else(|| Error::RaceNotFound {
                year: year.to_string(),
                round: round.to_string(),
            })
    }

    async fn fetch(&self, url: &str) -> Result<Envelope> {
        debug!(url, "querying Ergast");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus { status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::Schema {
            message: e.to_string(),
        })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn user_agent() -> String {
    format!(
        "gridbox-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/gridbox/gridbox-rs"
    )
}
