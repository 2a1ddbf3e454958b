//! In-memory observation store
//!
//! Reference implementation of the store contract over plain vectors, with
//! the same ordering and filtering semantics as the SQLite backend. Used by
//! tests and local development where no dataset file is available.

use anyhow::Result;

use hilo_core::{
    DailyReading, Measurement, ObservationStore, Station, StationActivity, TempObservation,
    ValueColumn,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl MemoryStore {
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }
}

#[async_trait::async_trait]
impl ObservationStore for MemoryStore {
    async fn max_measurement_date(&self, station: Option<&str>) -> Result<Option<String>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| station.map_or(true, |s| m.station == s))
            .map(|m| m.date.clone())
            .max())
    }

    async fn readings_in_range(
        &self,
        column: ValueColumn,
        station: Option<&str>,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<DailyReading>> {
        let mut rows: Vec<DailyReading> = self
            .measurements
            .iter()
            .filter(|m| station.map_or(true, |s| m.station == s))
            .filter(|m| m.date.as_str() >= date_from && m.date.as_str() <= date_to)
            .map(|m| DailyReading {
                date: m.date.clone(),
                value: match column {
                    ValueColumn::Precipitation => m.prcp,
                    ValueColumn::Temperature => m.tobs,
                },
            })
            .collect();
        // Stable sort keeps insertion order among duplicate dates.
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn temperatures_from(
        &self,
        date_from: &str,
        date_to: Option<&str>,
    ) -> Result<Vec<TempObservation>> {
        let mut rows: Vec<TempObservation> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= date_from)
            .filter(|m| date_to.map_or(true, |to| m.date.as_str() <= to))
            .map(|m| TempObservation {
                date: m.date.clone(),
                tobs: m.tobs,
            })
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn station_observation_counts(&self) -> Result<Vec<StationActivity>> {
        // First-seen enumeration order, like a GROUP BY over insertion order.
        let mut counts: Vec<StationActivity> = Vec::new();
        for m in &self.measurements {
            match counts.iter_mut().find(|c| c.station == m.station) {
                Some(entry) => entry.count += 1,
                None => counts.push(StationActivity {
                    station: m.station.clone(),
                    count: 1,
                }),
            }
        }
        Ok(counts)
    }

    async fn stations(&self) -> Result<Vec<Station>> {
        Ok(self.stations.clone())
    }
}
