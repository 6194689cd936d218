// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Translate PoolSettings into sqlx options and open the shared pool

use crate::config::{Config, PoolSettings};
use crate::db::Database;
use crate::errors::ApiError;
use sqlx::postgres::PgPoolOptions;

/// Build sqlx pool options from the configured tuning
/// DOCUMENTATION: Connections are tested before being handed out so a
/// recycled connection that died while idle is replaced transparently
pub fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(settings.max_connections)
        // Warm connections kept open by the pool
        .min_connections(settings.min_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(settings.acquire_timeout)
        // Recycle connections after this age
        .max_lifetime(settings.max_lifetime)
        // Close idle connections above min_connections
        .idle_timeout(settings.idle_timeout)
        .test_before_acquire(true)
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<Database, ApiError> {
    log::info!(
        "Initializing database pool: {} (max={}, min={})",
        redact_database_url(&config.database_url),
        config.pool.max_connections,
        config.pool.min_connections
    );

    let database = Database::connect(&config.database_url, &config.pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(database)
}

/// Hide the password of a connection string before it reaches the logs
pub fn redact_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let authority_end = rest.find('/').unwrap_or(rest.len());

    let Some(at) = rest[..authority_end].rfind('@') else {
        return url.to_string();
    };
    let Some(colon) = rest[..at].find(':') else {
        return url.to_string();
    };

    format!(
        "{}{}:****{}",
        &url[..authority_start],
        &rest[..colon],
        &rest[at..]
    )
}
