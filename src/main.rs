// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database pool, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use db::SpatialStore;
use dotenv::dotenv;
use handlers::HealthState;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration (never fails; missing values use defaults)
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},sqlx=warn", config.log_level));
    }
    env_logger::init();

    log::info!("Starting mapforge-api...");
    log::info!("Server Address: {}", config.bind_address());
    log::info!("Object store endpoint: {}", config.minio_endpoint);
    log::info!("AI service URL: {}", config.ai_service_url);

    // 4. Initialize database connection pool
    let database = match config::init_db_pool(&config).await {
        Ok(database) => database,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server; the pool is released on every exit path
    serve(
        database,
        &config.bind_address(),
        config.health_check_timeout,
    )
    .await
}

/// Bind and run the HTTP server, then close the store
/// DOCUMENTATION: The store is closed even when binding fails, so the verified
/// pool never outlives the server
async fn serve<S>(store: S, server_addr: &str, check_timeout: Duration) -> anyhow::Result<()>
where
    S: SpatialStore + Clone + 'static,
{
    let health_state = web::Data::new(HealthState::new(store.clone(), check_timeout));

    let server = HttpServer::new(move || {
        App::new()
            // Application state (shared pool behind the health probes)
            .app_data(health_state.clone())
            // Middleware
            .wrap(Logger::default())
            // Routes
            .configure(handlers::api_config::<S>)
            .default_service(web::to(handlers::not_found))
    })
    .bind(server_addr);

    let result = match server {
        Ok(server) => server
            .run()
            .await
            .context("HTTP server terminated with an error"),
        Err(e) => Err(e).with_context(|| format!("failed to bind {}", server_addr)),
    };

    // 6. Release the pool once in-flight requests have drained
    store.close().await;

    result
}
