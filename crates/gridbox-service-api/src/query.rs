//! Query-string types and validation for the API endpoints.
//!
//! Both fields deserialize as optional so that a missing parameter reaches
//! the handler instead of tripping axum's generic extractor rejection; the
//! validating accessors then produce the fixed 400 messages the front-end
//! expects. A parameter that is present but blank counts as missing.

use serde::Deserialize;

use crate::error::ApiError;

/// Query string for `GET /api/races`.
#[derive(Debug, Clone, Deserialize)]
pub struct RacesQuery {
    #[serde(default)]
    pub year: Option<String>,
}

impl RacesQuery {
    /// Validate and return the year, trimmed.
    pub fn year(&self) -> Result<&str, Box<ApiError>> {
        require(self.year.as_deref()).ok_or_else(|| Box::new(ApiError::missing_year()))
    }
}

/// Query string for `GET /api/results`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
}

impl ResultsQuery {
    /// Validate and return `(year, round)`, trimmed.
    ///
    /// Either one missing yields the combined message; the caller cannot tell
    /// which was absent, mirroring the front-end contract.
    pub fn params(&self) -> Result<(&str, &str), Box<ApiError>> {
        match (
            require(self.year.as_deref()),
            require(self.round.as_deref()),
        ) {
            (Some(year), Some(round)) => Ok((year, round)),
            _ => Err(Box::new(ApiError::missing_year_or_round())),
        }
    }
}

fn require(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
