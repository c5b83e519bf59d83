//! HTTP handlers for the task API.
//!
//! Each handler is a thin mapping from an HTTP operation to a single
//! repository call: deserialize the payload, perform the store operation,
//! translate absence into a 404, and serialize the response.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::dto::{CreateTaskRequest, DeleteTaskResponse, TaskResponse, UpdateTaskRequest};
use super::error::ApiErrorResponse;
use crate::domain::{NewTask, TaskPatch};
use crate::infrastructure::TaskRepository;

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Uses a trait object so the storage backend (Postgres in production,
/// in-memory in tests) is selected at startup.
#[derive(Clone)]
pub struct AppState {
    /// Task repository for persistence.
    pub task_repository: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Creates a new `AppState` over the given repository.
    #[must_use]
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }
}

// =============================================================================
// Task Handlers
// =============================================================================

/// POST /tasks - Create a new task.
///
/// # Response
///
/// - `201 Created` - the created task including its assigned id
/// - `500 Internal Server Error` - storage failure
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] if the repository operation fails.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let created = state.task_repository.insert(NewTask::from(request)).await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// GET /tasks - List all tasks.
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] if the repository operation fails.
pub async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let tasks = state.task_repository.list().await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// GET /tasks/{id} - Get a task by id.
///
/// # Response
///
/// - `200 OK` - task found
/// - `404 Not Found` - no task with the given id
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] if the id is absent or the repository
/// operation fails.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let task = state
        .task_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiErrorResponse::task_not_found(id))?;

    Ok(Json(TaskResponse::from(task)))
}

/// PUT /tasks/{id} - Update a task.
///
/// Applies only the fields present in the payload; omitted fields are
/// left untouched. A full payload therefore behaves as a full replace of
/// the mutable fields.
///
/// # Response
///
/// - `200 OK` - the updated task
/// - `404 Not Found` - no task with the given id
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] if the id is absent or the repository
/// operation fails.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let updated = state
        .task_repository
        .update(id, TaskPatch::from(request))
        .await?
        .ok_or_else(|| ApiErrorResponse::task_not_found(id))?;

    Ok(Json(TaskResponse::from(updated)))
}

/// DELETE /tasks/{id} - Delete a task.
///
/// # Response
///
/// - `200 OK` - `{"ok": true}`
/// - `404 Not Found` - no task with the given id
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] if the id is absent or the repository
/// operation fails.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteTaskResponse>, ApiErrorResponse> {
    if state.task_repository.delete(id).await? {
        Ok(Json(DeleteTaskResponse { ok: true }))
    } else {
        Err(ApiErrorResponse::task_not_found(id))
    }
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Health check response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check endpoint.
///
/// Returns a simple JSON response indicating the service is running.
///
/// # Response
///
/// - `200 OK`:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
