// src/db/database.rs
// DOCUMENTATION: PostGIS connection pool handle
// PURPOSE: Own every connection to the spatial store and expose liveness probes

use crate::config::{pool_options, PoolSettings};
use crate::errors::ApiError;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool};
use sqlx::Connection;
use std::str::FromStr;
use std::time::Duration;

/// Probes the health endpoint and startup verification run against the store
/// DOCUMENTATION: Implemented by Database; tests substitute an in-memory store
#[async_trait]
pub trait SpatialStore: Send + Sync {
    /// Round trip on a pooled connection without running a query
    async fn ping(&self) -> Result<(), ApiError>;

    /// Version reported by the PostGIS extension
    async fn postgis_version(&self) -> Result<String, ApiError>;

    /// Release every held connection. Calling it again is a no-op.
    async fn close(&self);
}

/// Verify a freshly opened store is reachable
/// DOCUMENTATION: On a failed ping the store is closed before the error is returned,
/// so a caller never receives an unverified store nor leaks its connections
pub async fn establish<S: SpatialStore>(store: S) -> Result<S, ApiError> {
    if let Err(e) = store.ping().await {
        log::error!("Initial database ping failed, releasing pool: {}", e);
        store.close().await;
        return Err(e);
    }
    Ok(store)
}

/// Shared pool handle
/// DOCUMENTATION: Created once in main.rs and injected into handlers.
/// Clones share the same underlying PgPool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Parse, tune, open and verify the pool
    /// DOCUMENTATION: Starts the background health monitor once verified
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self, ApiError> {
        let connect_options =
            PgConnectOptions::from_str(database_url).map_err(ApiError::ConfigParse)?;

        let pool = pool_options(settings)
            .connect_with(connect_options)
            .await
            .map_err(ApiError::PoolCreation)?;

        let database = establish(Database::from_pool(pool)).await?;
        database.start_health_monitor(settings.health_check_period);

        Ok(database)
    }

    pub(crate) fn from_pool(pool: PgPool) -> Self {
        Database { pool }
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Periodically ping the pool so broken connections show up in the logs
    /// before a request hits them. Exits once the pool is closed.
    fn start_health_monitor(&self, period: Duration) {
        if period.is_zero() {
            log::warn!("Database health monitor disabled (period is zero)");
            return;
        }

        let database = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                if database.is_closed() {
                    log::debug!("Database closed, stopping health monitor");
                    break;
                }
                match database.ping().await {
                    Ok(()) => log::debug!(
                        "Database health monitor: ok (size={}, idle={})",
                        database.pool.size(),
                        database.pool.num_idle()
                    ),
                    Err(e) => log::warn!("Database health monitor: {}", e),
                }
            }
        });
    }
}

#[async_trait]
impl SpatialStore for Database {
    async fn ping(&self) -> Result<(), ApiError> {
        let mut conn = self.pool.acquire().await.map_err(ApiError::Connectivity)?;
        conn.ping().await.map_err(ApiError::Connectivity)
    }

    async fn postgis_version(&self) -> Result<String, ApiError> {
        sqlx::query_scalar::<_, String>("SELECT PostGIS_Version()")
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Query)
    }

    async fn close(&self) {
        if self.pool.is_closed() {
            log::debug!("Database pool already closed");
            return;
        }
        self.pool.close().await;
        log::info!("Database pool closed");
    }
}
