//! Row types matching the climate dataset's SQLite layout
//!
//! The dataset file is produced by an upstream loading step; these
//! structures must match its layout exactly.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hilo_core::{Station, ValueColumn};

/// Station table row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StationRow {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            id: row.station,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        }
    }
}

/// (date, value) row produced by the range queries.
#[derive(Debug, Clone, FromRow)]
pub struct ReadingRow {
    pub date: String,
    pub value: Option<f64>,
}

/// (station, count) row produced by the activity ranking query.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub station: String,
    pub count: i64,
}

/// Table names in the dataset schema.
pub mod tables {
    pub const STATION: &str = "station";
    pub const MEASUREMENT: &str = "measurement";
}

/// SQL column read for a value column.
pub fn value_column_name(column: ValueColumn) -> &'static str {
    match column {
        ValueColumn::Precipitation => "prcp",
        ValueColumn::Temperature => "tobs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_row_projects_to_core_type() {
        let row = StationRow {
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        };

        let station = Station::from(row);
        assert_eq!(station.id, "USC00519397");
        assert_eq!(station.name, "WAIKIKI 717.2, HI US");
    }

    #[test]
    fn value_column_names() {
        assert_eq!(value_column_name(ValueColumn::Precipitation), "prcp");
        assert_eq!(value_column_name(ValueColumn::Temperature), "tobs");
    }

    #[test]
    fn table_names() {
        assert_eq!(tables::STATION, "station");
        assert_eq!(tables::MEASUREMENT, "measurement");
    }
}
