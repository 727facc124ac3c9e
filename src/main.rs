//! # Web API
//!
//! A read-only Users/Posts HTTP service.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool, migrations and seed data
//! - HTTP server

use anyhow::Result;
use tracing::info;

use web_api::config::Settings;
use web_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    web_api::telemetry::init_tracing();

    info!("Starting Web API...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        data_source = ?settings.data_source,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
