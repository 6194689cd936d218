// src/db/testing.rs
// DOCUMENTATION: In-memory SpatialStore for unit tests
// PURPOSE: Drive probe outcomes without a running PostgreSQL

use super::{Database, SpatialStore};
use crate::config::{pool_options, PoolSettings};
use crate::errors::ApiError;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// How a mocked probe behaves
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Ok,
    Fail,
    /// Never completes
    Stall,
}

#[derive(Debug, Clone)]
pub struct MockStore {
    ping: Outcome,
    postgis: Outcome,
    pings: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl MockStore {
    pub fn new(ping: Outcome, postgis: Outcome) -> Self {
        MockStore {
            ping,
            postgis,
            pings: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn ping_counter(&self) -> Arc<AtomicUsize> {
        self.pings.clone()
    }

    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        self.closes.clone()
    }
}

#[async_trait]
impl SpatialStore for MockStore {
    async fn ping(&self) -> Result<(), ApiError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        match self.ping {
            Outcome::Ok => Ok(()),
            Outcome::Fail => Err(ApiError::Connectivity(sqlx::Error::PoolTimedOut)),
            Outcome::Stall => std::future::pending().await,
        }
    }

    async fn postgis_version(&self) -> Result<String, ApiError> {
        match self.postgis {
            Outcome::Ok => Ok("3.4 USE_GEOS=1 USE_PROJ=1 USE_STATS=1".to_string()),
            Outcome::Fail => Err(ApiError::Query(sqlx::Error::Protocol(
                "function postgis_version() does not exist".to_string(),
            ))),
            Outcome::Stall => std::future::pending().await,
        }
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Real pool handle that has not connected yet; every checkout dials `url`
pub fn lazy_database(url: &str, settings: &PoolSettings) -> Database {
    let options = PgConnectOptions::from_str(url).expect("valid connection string");
    Database::from_pool(pool_options(settings).connect_lazy_with(options))
}
