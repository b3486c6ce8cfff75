//! Database connection: SQLite file created on first use.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for the database lock before the request fails.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection options for `database_url`. Foreign-key enforcement is off: deleting a
/// referenced teacher or class leaves dependents pointing at the old id.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(false);
    Ok(opts)
}

/// Open the pool described by `config`. File databases run in WAL mode so readers do not block
/// the single writer.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = connect_options(&config.database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(database_url = %config.database_url, "database connected");
    Ok(pool)
}

/// Single-connection in-memory pool. The connection is never recycled, so the database
/// lives as long as the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = connect_options("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let err = connect_options("sqlite://school.db?mode=bogus").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::DatabaseUrl(_))));
    }

    #[tokio::test]
    async fn in_memory_pool_answers_queries() {
        let pool = connect_in_memory().await.unwrap();
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
