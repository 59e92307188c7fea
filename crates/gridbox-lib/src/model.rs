//! Typed view of the Ergast response envelope and the shapes the service
//! returns to callers.
//!
//! Ergast wraps everything in `MRData.RaceTable.Races[...]`. Only the fields
//! the projections touch are declared here; everything else is ignored on
//! deserialization. `Driver` and `Constructor` are deliberately kept as raw
//! JSON values and passed through to the caller unmodified.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level Ergast response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MrData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

/// One race as Ergast reports it.
///
/// `date` and `results` only matter for results queries; the season calendar
/// omits `Results` entirely, so both are optional at the type level.
#[derive(Debug, Clone, Deserialize)]
pub struct Race {
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: Vec<RaceResult>,
}

/// A single classified entry in a race's results table.
#[derive(Debug, Clone, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "Driver")]
    pub driver: Value,
    #[serde(rename = "Constructor")]
    pub constructor: Value,
    pub grid: String,
    pub position: String,
    pub status: String,
    pub points: String,
    #[serde(default)]
    pub laps: Option<String>,
    #[serde(rename = "FastestLap", default)]
    pub fastest_lap: Option<Value>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Minimal projected view of a race: round plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    pub round: String,
    pub name: String,
}

/// A single driver's finishing data for one race, enriched with race-level
/// metadata duplicated onto every row.
///
/// The optional fields serialize as `null` when Ergast omitted them; the
/// front-end relies on them always being present.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub race_name: String,
    pub round: String,
    pub date: String,
    #[serde(rename = "Driver")]
    pub driver: Value,
    #[serde(rename = "Constructor")]
    pub constructor: Value,
    pub grid: String,
    pub position: String,
    pub status: String,
    pub points: String,
    pub laps: Option<String>,
    #[serde(rename = "FastestLap")]
    pub fastest_lap: Option<Value>,
    pub number: Option<String>,
}
