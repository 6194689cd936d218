// src/models/health.rs
// DOCUMENTATION: Health check response body
// PURPOSE: Per-request status snapshot serialized by GET /api/health

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SERVICE_POSTGRES: &str = "postgres";
pub const SERVICE_POSTGIS: &str = "postgis";

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Response body of the health endpoint
/// DOCUMENTATION: Built fresh for each request and discarded after serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// RFC3339 UTC, second precision
    pub timestamp: String,
    /// Dependency name -> "healthy" | "unhealthy: <message>"
    pub services: BTreeMap<String, String>,
    pub version: String,
}

impl HealthResponse {
    pub fn new() -> Self {
        HealthResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            services: BTreeMap::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn mark_healthy(&mut self, service: &str) {
        self.services
            .insert(service.to_string(), "healthy".to_string());
    }

    pub fn mark_unhealthy(&mut self, service: &str, reason: impl std::fmt::Display) {
        self.services
            .insert(service.to_string(), format!("unhealthy: {}", reason));
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}
