//! The four analytical query operations

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::calendar::trailing_year_start;
use crate::stats::daily_temperature_stats;
use crate::store::ObservationStore;
use crate::types::{
    DailyReading, DailyTempStats, Station, StationActivity, TempObservation, ValueColumn,
};

#[derive(Debug, Error)]
pub enum EngineError {
    /// A reference computation (max date, most-active station) had no rows
    /// to compute from.
    #[error("no measurement data available")]
    NoData,

    #[error("invalid reference date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Read-only query engine over an observation store.
///
/// Holds no mutable state; one instance serves concurrent requests without
/// locking.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn ObservationStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self { store }
    }

    /// Precipitation readings over the trailing year ending at the dataset's
    /// most recent observation date.
    ///
    /// Rows sharing a date stay separate and null precipitation values are
    /// kept.
    pub async fn precipitation(&self) -> EngineResult<Vec<DailyReading>> {
        let max_date = self
            .store
            .max_measurement_date(None)
            .await?
            .ok_or(EngineError::NoData)?;
        let start = trailing_year_start(&max_date)?;

        let readings = self
            .store
            .readings_in_range(ValueColumn::Precipitation, None, &start, &max_date)
            .await?;
        debug!(rows = readings.len(), %start, %max_date, "precipitation window");
        Ok(readings)
    }

    /// All stations, unfiltered, in store order.
    pub async fn stations(&self) -> EngineResult<Vec<Station>> {
        Ok(self.store.stations().await?)
    }

    /// The station with the most measurement rows.
    ///
    /// Ties resolve to the lexically smallest station id, so repeated calls
    /// against the same data pick the same station regardless of the order
    /// the store returns counts in.
    pub async fn most_active_station(&self) -> EngineResult<StationActivity> {
        let counts = self.store.station_observation_counts().await?;
        counts
            .into_iter()
            .reduce(|best, next| {
                if next.count > best.count
                    || (next.count == best.count && next.station < best.station)
                {
                    next
                } else {
                    best
                }
            })
            .ok_or(EngineError::NoData)
    }

    /// Temperature observations for the most active station over that
    /// station's own trailing year.
    pub async fn temperature_observations(&self) -> EngineResult<Vec<TempObservation>> {
        let most_active = self.most_active_station().await?;
        let max_date = self
            .store
            .max_measurement_date(Some(&most_active.station))
            .await?
            .ok_or(EngineError::NoData)?;
        let start = trailing_year_start(&max_date)?;

        let readings = self
            .store
            .readings_in_range(
                ValueColumn::Temperature,
                Some(&most_active.station),
                &start,
                &max_date,
            )
            .await?;
        debug!(
            station = %most_active.station,
            rows = readings.len(),
            "temperature observations"
        );
        Ok(readings
            .into_iter()
            .map(|r| TempObservation {
                date: r.date,
                tobs: r.value,
            })
            .collect())
    }

    /// Min/avg/max temperature grouped by date for `date >= start` and, when
    /// given, `date <= end`.
    ///
    /// Bounds compare lexically against stored date strings; no validation
    /// is applied, so a malformed bound matches whatever lexical comparison
    /// says (possibly nothing), and an unmatched `start` yields an empty
    /// result rather than an error.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> EngineResult<Vec<DailyTempStats>> {
        let rows = self.store.temperatures_from(start, end).await?;
        Ok(daily_temperature_stats(&rows))
    }
}
