//! Per-request transaction. Every service call receives the unit of work explicitly.

use crate::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

/// One database transaction on a pooled connection.
///
/// Writers start with `BEGIN IMMEDIATE` so the write lock is taken up front and contention
/// waits on the busy timeout instead of failing when a read lock is upgraded. `finish` commits
/// or rolls back exactly once; dropping an unfinished unit of work rolls it back in the
/// background before the connection goes back to the pool.
pub struct UnitOfWork {
    conn: Option<PoolConnection<Sqlite>>,
}

impl UnitOfWork {
    /// Deferred transaction for requests that only read.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, AppError> {
        Self::start(pool, "BEGIN").await
    }

    /// Immediate transaction for requests that write.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, AppError> {
        Self::start(pool, "BEGIN IMMEDIATE").await
    }

    async fn start(pool: &SqlitePool, statement: &'static str) -> Result<Self, AppError> {
        let mut conn = pool.acquire().await?;
        sqlx::query(statement).execute(&mut *conn).await?;
        Ok(Self { conn: Some(conn) })
    }

    /// Connection bound to the open transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        // Only `Drop` takes the connection out.
        self.conn.as_deref_mut().expect("connection held until the unit of work is dropped")
    }

    /// Commit on `Ok`, roll back on `Err`, and hand `result` back.
    pub async fn finish<T>(self, result: Result<T, AppError>) -> Result<T, AppError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    pub(crate) async fn commit(mut self) -> Result<(), AppError> {
        sqlx::query("COMMIT").execute(self.conn()).await?;
        self.conn.take();
        Ok(())
    }

    pub(crate) async fn rollback(mut self) -> Result<(), AppError> {
        sqlx::query("ROLLBACK").execute(self.conn()).await?;
        self.conn.take();
        Ok(())
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        let Some(mut conn) = self.conn.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
                        tracing::warn!(error = %e, "rollback of abandoned transaction failed");
                        conn.close_on_drop();
                    }
                });
            }
            // Closing the connection discards the open transaction.
            Err(_) => conn.close_on_drop(),
        }
    }
}
