//! Read-only store contract consumed by the query engine

use anyhow::Result;

use crate::types::{DailyReading, Station, StationActivity, TempObservation, ValueColumn};

/// Read access to the station and measurement record sets.
///
/// Implementations never partially fail: a call either errors or returns the
/// complete (possibly empty) result. Absence of a maximal date is `Ok(None)`,
/// not an error; deciding whether that is fatal belongs to the caller.
#[async_trait::async_trait]
pub trait ObservationStore: Send + Sync {
    /// Lexically maximal observation date, optionally restricted to one
    /// station. `None` when no measurement matches.
    async fn max_measurement_date(&self, station: Option<&str>) -> Result<Option<String>>;

    /// Readings of `column` with `date_from <= date <= date_to`, optionally
    /// restricted to one station, ordered by date ascending.
    ///
    /// One element per matching measurement row: duplicate dates and null
    /// values are preserved.
    async fn readings_in_range(
        &self,
        column: ValueColumn,
        station: Option<&str>,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<DailyReading>>;

    /// Temperature observations with `date >= date_from` and, when given,
    /// `date <= date_to`, across all stations, ordered by date ascending.
    async fn temperatures_from(
        &self,
        date_from: &str,
        date_to: Option<&str>,
    ) -> Result<Vec<TempObservation>>;

    /// Measurement count per station. Order is store-defined.
    async fn station_observation_counts(&self) -> Result<Vec<StationActivity>>;

    /// All stations, in the store's stable enumeration order.
    async fn stations(&self) -> Result<Vec<Station>>;
}
