//! Observation-store queries over the SQLite dataset

use anyhow::Result;
use tracing::{debug, instrument};

use hilo_core::{
    DailyReading, ObservationStore, Station, StationActivity, TempObservation, ValueColumn,
};

use crate::client::SqliteStore;
use crate::schema::{value_column_name, ActivityRow, ReadingRow, StationRow};

#[async_trait::async_trait]
impl ObservationStore for SqliteStore {
    #[instrument(skip(self))]
    async fn max_measurement_date(&self, station: Option<&str>) -> Result<Option<String>> {
        let max: Option<String> = match station {
            Some(id) => {
                sqlx::query_scalar("SELECT MAX(date) FROM measurement WHERE station = ?")
                    .bind(id)
                    .fetch_one(self.pool())
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT MAX(date) FROM measurement")
                    .fetch_one(self.pool())
                    .await?
            }
        };

        Ok(max)
    }

    #[instrument(skip(self))]
    async fn readings_in_range(
        &self,
        column: ValueColumn,
        station: Option<&str>,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<DailyReading>> {
        // Column names come from a closed enum, never from user input.
        let value = value_column_name(column);

        let rows: Vec<ReadingRow> = match station {
            Some(id) => {
                sqlx::query_as(&format!(
                    "SELECT date, {value} AS value FROM measurement \
                     WHERE station = ? AND date BETWEEN ? AND ? \
                     ORDER BY date ASC"
                ))
                .bind(id)
                .bind(date_from)
                .bind(date_to)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT date, {value} AS value FROM measurement \
                     WHERE date BETWEEN ? AND ? \
                     ORDER BY date ASC"
                ))
                .bind(date_from)
                .bind(date_to)
                .fetch_all(self.pool())
                .await?
            }
        };

        debug!(rows = rows.len(), "readings in range");
        Ok(rows
            .into_iter()
            .map(|r| DailyReading {
                date: r.date,
                value: r.value,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn temperatures_from(
        &self,
        date_from: &str,
        date_to: Option<&str>,
    ) -> Result<Vec<TempObservation>> {
        let rows: Vec<ReadingRow> = match date_to {
            Some(to) => {
                sqlx::query_as(
                    "SELECT date, tobs AS value FROM measurement \
                     WHERE date >= ? AND date <= ? \
                     ORDER BY date ASC",
                )
                .bind(date_from)
                .bind(to)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT date, tobs AS value FROM measurement \
                     WHERE date >= ? \
                     ORDER BY date ASC",
                )
                .bind(date_from)
                .fetch_all(self.pool())
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|r| TempObservation {
                date: r.date,
                tobs: r.value,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn station_observation_counts(&self) -> Result<Vec<StationActivity>> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            "SELECT station, COUNT(*) AS count FROM measurement GROUP BY station",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StationActivity {
                station: r.station,
                count: r.count,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn stations(&self) -> Result<Vec<Station>> {
        let rows: Vec<StationRow> = sqlx::query_as(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }
}
