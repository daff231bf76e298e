//! HTTP server entry point for the task-management service.
//!
//! Loads configuration from the environment, opens (and seeds, on first
//! run) the SQLite database, and serves the REST API until ctrl-c.

use std::sync::Arc;

use mockable::DefaultClock;
use punchlist::api::{AppState, create_router};
use punchlist::config::{AppConfig, ConfigError};
use punchlist::todo::adapters::sqlite::SqliteTaskRepository;
use punchlist::todo::ports::TaskRepositoryError;
use punchlist::todo::services::TaskService;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Startup failures.
#[derive(Debug, Error)]
enum BootError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The database could not be opened or bootstrapped.
    #[error("storage error: {0}")]
    Storage(#[from] TaskRepositoryError),
    /// The listener could not be bound or the server failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BootError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,punchlist=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database_path,
        environment = ?config.environment,
        "configuration loaded"
    );

    let clock = Arc::new(DefaultClock);
    let repository = SqliteTaskRepository::connect(&config.database_path, &*clock)?;
    let service = Arc::new(TaskService::new(Arc::new(repository), clock));
    let state = AppState::new(service, config.environment);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("task service listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("task service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
