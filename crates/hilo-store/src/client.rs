//! SQLite client and connection management

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::{StoreError, StoreResult};

/// SQLite-backed observation store wrapping an sqlx connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open an existing dataset file read-only.
    pub async fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::Config(format!(
                "database file not found: {}",
                path.display()
            )));
        }

        // Dataset files ship in rollback-journal mode; the default WAL
        // pragma would need write access on open.
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .journal_mode(SqliteJournalMode::Delete);
        Self::with_options(opts).await
    }

    /// Open with custom options. Tests and tooling use this to get a
    /// writable database.
    pub async fn with_options(opts: SqliteConnectOptions) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Get reference to underlying pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Test the database connection
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_rejects_missing_file() {
        let err = SqliteStore::open("/nonexistent/climate.sqlite")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[tokio::test]
    async fn ping_works_on_fresh_database() {
        let dir = tempfile::tempdir().unwrap();
        let opts = SqliteConnectOptions::new()
            .filename(dir.path().join("climate.sqlite"))
            .create_if_missing(true);
        let store = SqliteStore::with_options(opts).await.unwrap();
        store.ping().await.unwrap();
        store.close().await;
    }
}
