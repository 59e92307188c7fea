//! Projections from the Ergast envelope to the shapes the service returns.

use crate::error::{Error, Result};
use crate::model::{Race, RaceSummary, ResultRow};

/// Project a season calendar to `{round, name}` pairs, preserving upstream order.
pub fn summarize_races(races: Vec<Race>) -> Vec<RaceSummary> {
    races
        .into_iter()
        .map(|race| RaceSummary {
            round: race.round,
            name: race.race_name,
        })
        .collect()
}

/// Flatten one race's results table into rows, duplicating the race-level
/// name, round and date onto every row.
///
/// `year` and `round` are only used to label the error when the race carries
/// no date. Upstream order is preserved.
pub fn flatten_results(race: Race, year: &str, round: &str) -> Result<Vec<ResultRow>> {
    let date = race.date.ok_or_else(|| Error::MissingDate {
        year: year.to_string(),
        round: round.to_string(),
    })?;

    let rows = race
        .results
        .into_iter()
        .map(|result| ResultRow {
            race_name: race.race_name.clone(),
            round: race.round.clone(),
            date: date.clone(),
            driver: result.driver,
            constructor: result.constructor,
            grid: result.grid,
            position: result.position,
            status: result.status,
            points: result.points,
            laps: result.laps,
            fastest_lap: result.fastest_lap,
            number: result.number,
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RaceResult;
    use serde_json::json;

    fn race(round: &str, name: &str) -> Race {
        Race {
            round: round.to_string(),
            race_name: name.to_string(),
            date: None,
            results: Vec::new(),
        }
    }

    fn result(position: &str, laps: Option<&str>) -> RaceResult {
        RaceResult {
            driver: json!({"driverId": format!("driver-{position}")}),
            constructor: json!({"constructorId": "team"}),
            grid: "1".to_string(),
            position: position.to_string(),
            status: "Finished".to_string(),
            points: "0".to_string(),
            laps: laps.map(String::from),
            fastest_lap: None,
            number: None,
        }
    }

    #[test]
    fn summarize_preserves_order() {
        let races = vec![
            race("1", "Bahrain Grand Prix"),
            race("2", "Saudi Arabian Grand Prix"),
            race("3", "Australian Grand Prix"),
        ];
        let summaries = summarize_races(races);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].round, "1");
        assert_eq!(summaries[2].name, "Australian Grand Prix");
    }

    #[test]
    fn summarize_empty_calendar_is_empty() {
        assert!(summarize_races(Vec::new()).is_empty());
    }

    #[test]
    fn flatten_duplicates_race_metadata_onto_every_row() {
        let mut source = race("5", "Miami Grand Prix");
        source.date = Some("2023-05-07".to_string());
        source.results = vec![result("1", Some("57")), result("2", None)];

        let rows = flatten_results(source, "2023", "5").unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.race_name, "Miami Grand Prix");
            assert_eq!(row.round, "5");
            assert_eq!(row.date, "2023-05-07");
        }
        assert_eq!(rows[0].laps.as_deref(), Some("57"));
        assert!(rows[1].laps.is_none());
        assert_eq!(rows[0].position, "1");
        assert_eq!(rows[1].position, "2");
    }

    #[test]
    fn flatten_without_date_fails() {
        let mut source = race("5", "Miami Grand Prix");
        source.results = vec![result("1", None)];

        let err = flatten_results(source, "2023", "5").unwrap_err();
        assert!(matches!(err, Error::MissingDate { .. }));
        assert!(err.to_string().contains("2023"));
    }

    #[test]
    fn flatten_empty_results_yields_empty_rows() {
        let mut source = race("5", "Miami Grand Prix");
        source.date = Some("2023-05-07".to_string());

        let rows = flatten_results(source, "2023", "5").unwrap();
        assert!(rows.is_empty());
    }
}
