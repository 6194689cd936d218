// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Mount the /api scope and the JSON 404 fallback

pub mod health;

use crate::db::SpatialStore;
use crate::errors::ApiError;
use actix_web::{web, HttpRequest};

pub use health::{config as health_config, HealthState};

/// Routes under /api
pub fn api_config<S: SpatialStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(health_config::<S>));
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<&'static str, ApiError> {
    Err(ApiError::NotFound(req.path().to_string()))
}
