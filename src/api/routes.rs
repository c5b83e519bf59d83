//! Route configuration for the task API.
//!
//! This module defines all HTTP routes and maps them to handlers.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | POST | /tasks | `create_task` | Create a new task |
//! | GET | /tasks | `list_tasks` | List all tasks |
//! | GET | /tasks/{id} | `get_task` | Get a task by id |
//! | PUT | /tasks/{id} | `update_task` | Update a task |
//! | DELETE | /tasks/{id} | `delete_task` | Delete a task |
//! | GET | /health | `health_check` | Health check endpoint |

use axum::Router;
use axum::http::header::{CONTENT_TYPE, InvalidHeaderValue};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    AppState, create_task, delete_task, get_task, health_check, list_tasks, update_task,
};

/// Creates the Axum router with all API routes and middleware.
///
/// # Arguments
///
/// * `state` - The application state holding the task repository
/// * `cors` - The CORS layer, built from the configured allow-list via
///   [`cors_layer`]
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from the configured origin allow-list.
///
/// Cross-origin access is restricted to exactly the listed origins; an
/// empty list allows none.
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if a configured origin is not a valid
/// header value.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

// =============================================================================
// Tests
// =============================================================================
