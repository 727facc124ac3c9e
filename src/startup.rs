//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{http::StatusCode, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::application::services::{PostService, PostServiceImpl, UserService, UserServiceImpl};
use crate::config::{DataSource, Settings};
use crate::domain::{PostRepository, UserRepository};
use crate::infrastructure::database::{self, SeedOutcome};
use crate::infrastructure::gateway::{
    JsonPlaceholderPostGateway, JsonPlaceholderUserGateway, PlaceholderClient,
};
use crate::infrastructure::repositories::{SqlitePostRepository, SqliteUserRepository};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub user_service: Arc<dyn UserService>,
    pub post_service: Arc<dyn PostService>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        user_service: Arc<dyn UserService>,
        post_service: Arc<dyn PostService>,
    ) -> Self {
        Self {
            db,
            user_service,
            post_service,
        }
    }

    /// Wire services on top of the given repository implementations.
    pub fn with_repositories<U, P>(db: SqlitePool, user_repo: Arc<U>, post_repo: Arc<P>) -> Self
    where
        U: UserRepository + 'static,
        P: PostRepository + 'static,
    {
        Self::new(
            db,
            Arc::new(UserServiceImpl::new(user_repo)),
            Arc::new(PostServiceImpl::new(post_repo)),
        )
    }
}

/// Build the state for the configured data source.
///
/// The pool is kept either way so readiness can report on the local store.
pub fn compose_state(settings: &Settings, db: SqlitePool) -> Result<AppState> {
    let state = match settings.data_source {
        DataSource::Database => AppState::with_repositories(
            db.clone(),
            Arc::new(SqliteUserRepository::new(db.clone())),
            Arc::new(SqlitePostRepository::new(db)),
        ),
        DataSource::ExternalApi => {
            let client = PlaceholderClient::from_settings(&settings.external_api)?;
            tracing::info!(base_url = %client.base_url(), "Using external API repositories");
            AppState::with_repositories(
                db,
                Arc::new(JsonPlaceholderUserGateway::new(client.clone())),
                Arc::new(JsonPlaceholderPostGateway::new(client)),
            )
        }
    };
    tracing::info!(data_source = ?settings.data_source, "Repositories wired");
    Ok(state)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;

        match database::seed_data(&db).await? {
            SeedOutcome::Seeded { users, posts } => {
                tracing::info!(users, posts, "Seeded sample data")
            }
            SeedOutcome::AlreadyPresent => tracing::debug!("Sample data already present"),
        }

        let state = compose_state(&settings, db)?;

        let router = with_middleware(routes::create_router(state), &settings);

        // Bind to address
        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until ctrl-c, letting in-flight requests finish
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }
}

/// Wrap the router in tracing, the request timeout and CORS
pub fn with_middleware(router: Router, settings: &Settings) -> Router {
    router
        .layer(logging::create_trace_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(settings.server.request_timeout_secs),
        ))
        .layer(cors::create_cors_layer(&settings.cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
