use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::Postgres;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Connection provider for the banking schema. One lazily-created pool for
/// the whole process; every request checks out exactly one connection and
/// holds it for its full duration. Dropping the `PoolConnection` returns it
/// to the pool on every exit path, success or failure.
pub struct DatabaseManager;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

impl DatabaseManager {
    async fn pool() -> Result<&'static PgPool, DatabaseError> {
        POOL.get_or_try_init(|| async {
            let db = &config::config().database;
            let url = db
                .url
                .as_deref()
                .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

            let pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
                .connect(url)
                .await?;

            info!("created database pool (max_connections={})", db.max_connections);
            Ok(pool)
        })
        .await
    }

    /// Check out a single-use connection. Callers own it for the request
    /// lifetime; release happens on drop.
    pub async fn acquire() -> Result<PoolConnection<Postgres>, DatabaseError> {
        Ok(Self::pool().await?.acquire().await?)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let mut conn = Self::acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
