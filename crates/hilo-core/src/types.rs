//! Core data types for climate observations

use serde::{Deserialize, Serialize};

/// Observation date in ISO `YYYY-MM-DD` form.
///
/// Dates are carried as strings end to end; lexical order on well-formed
/// ISO dates matches chronological order.
pub type ObservationDate = String;

/// A fixed weather-observation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily reading for a station.
///
/// Duplicate (station, date) rows occur in the source data and are kept
/// as-is; both value columns are nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub station: String,
    pub date: ObservationDate,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

/// A (date, value) pair for one value column of the measurement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    pub date: ObservationDate,
    pub value: Option<f64>,
}

/// A (date, temperature) pair as served by the temperature-observation
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempObservation {
    pub date: ObservationDate,
    pub tobs: Option<f64>,
}

/// Grouped min/avg/max temperature for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTempStats {
    pub date: ObservationDate,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Measurement count for one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationActivity {
    pub station: String,
    pub count: i64,
}

/// The measurement column a range query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumn {
    Precipitation,
    Temperature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_observation_serde_shape() {
        let obs = TempObservation {
            date: "2017-08-23".to_string(),
            tobs: Some(81.0),
        };
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"date":"2017-08-23","tobs":81.0}"#);

        let null_obs: TempObservation =
            serde_json::from_str(r#"{"date":"2017-08-23","tobs":null}"#).unwrap();
        assert_eq!(null_obs.tobs, None);
    }

    #[test]
    fn daily_temp_stats_serde_shape() {
        let stats = DailyTempStats {
            date: "2017-01-01".to_string(),
            min: 60.0,
            avg: 65.0,
            max: 70.0,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["date"], "2017-01-01");
        assert_eq!(json["min"], 60.0);
        assert_eq!(json["avg"], 65.0);
        assert_eq!(json["max"], 70.0);
    }

    #[test]
    fn station_serde_roundtrip() {
        let json = r#"{"id":"USC00519397","name":"WAIKIKI 717.2, HI US","latitude":21.2716,"longitude":-157.8168,"elevation":3.0}"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.id, "USC00519397");
        assert_eq!(station.elevation, 3.0);
    }
}
