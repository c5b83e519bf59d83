//! Task API entry point.
//!
//! Loads configuration from the environment, connects to `PostgreSQL`,
//! ensures the schema exists, and serves the HTTP API until a shutdown
//! signal arrives.

use std::sync::Arc;

use sqlx::PgPool;
use task_api::api::{AppState, cors_layer, create_router};
use task_api::infrastructure::{AppConfig, PostgresTaskRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting task API");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Configuration error: {error}");
            std::process::exit(1);
        }
    };

    let pool = match PgPool::connect(&config.database_url()).await {
        Ok(pool) => {
            tracing::info!(
                host = %config.db_host,
                port = config.db_port,
                database = %config.db_name,
                "Connected to PostgreSQL"
            );
            pool
        }
        Err(error) => {
            tracing::error!("Failed to connect to PostgreSQL: {error}");
            std::process::exit(1);
        }
    };

    let repository = PostgresTaskRepository::new(pool);
    if let Err(error) = repository.ensure_schema().await {
        tracing::error!("Failed to create database schema: {error}");
        std::process::exit(1);
    }

    let cors = match cors_layer(&config.cors_allowed_origins) {
        Ok(cors) => cors,
        Err(error) => {
            tracing::error!("Invalid CORS origin in configuration: {error}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(Arc::new(repository));
    let app = create_router(state, cors);

    let bind_address = config.bind_address();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!("Failed to bind {bind_address}: {error}");
            std::process::exit(1);
        }
    };

    tracing::info!("Task API started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST   /tasks      - Create task");
    tracing::info!("  GET    /tasks      - List tasks");
    tracing::info!("  GET    /tasks/:id  - Get task");
    tracing::info!("  PUT    /tasks/:id  - Update task");
    tracing::info!("  DELETE /tasks/:id  - Delete task");
    tracing::info!("  GET    /health     - Health check");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {error}");
        std::process::exit(1);
    }

    tracing::info!("Task API stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
