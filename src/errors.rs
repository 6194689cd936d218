// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for startup and request paths

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Startup failures (ConfigParse, PoolCreation, Connectivity) abort launch.
/// Request-time failures (CheckTimeout, Query) are rendered into health entries.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to parse database config: {0}")]
    ConfigParse(#[source] sqlx::Error),

    #[error("failed to create connection pool: {0}")]
    PoolCreation(#[source] sqlx::Error),

    #[error("failed to ping database: {0}")]
    Connectivity(#[source] sqlx::Error),

    #[error("health check timed out after {}ms", .0.as_millis())]
    CheckTimeout(Duration),

    #[error("failed to get PostGIS version: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Short message for health entries: the driver error itself for store
    /// failures, without the startup context prefix
    pub fn detail(&self) -> String {
        match self {
            ApiError::Connectivity(e) | ApiError::Query(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::ConfigParse(_) => "CONFIG_PARSE_ERROR",
            ApiError::PoolCreation(_) => "POOL_CREATION_ERROR",
            ApiError::Connectivity(_) => "CONNECTIVITY_ERROR",
            ApiError::CheckTimeout(_) => "CHECK_TIMEOUT",
            ApiError::Query(_) => "QUERY_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Convert ApiError to HTTP response
/// DOCUMENTATION: Only the short message reaches the client, never the source chain
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CheckTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Connectivity(_) | ApiError::Query(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::ConfigParse(_) | ApiError::PoolCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
