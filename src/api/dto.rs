//! Data Transfer Objects for API requests and responses.
//!
//! These DTOs are separate from domain models, providing a clean API
//! contract. The update request tracks field *presence*: a field omitted
//! from the payload is left untouched, while a field explicitly set to
//! `null` clears it. This distinction is what makes partial update safe
//! against accidentally wiping fields the caller never mentioned.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{NewTask, Task, TaskPatch};

// =============================================================================
// Requests
// =============================================================================

/// Request DTO for creating a new task.
///
/// # Example JSON
///
/// ```json
/// {
///     "title": "Buy milk",
///     "description": "2 liters",
///     "completed": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Title of the task (required).
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag (defaults to false).
    #[serde(default)]
    pub completed: bool,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(request: CreateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            completed: request.completed,
        }
    }
}

/// Request DTO for updating a task.
///
/// Only fields present in the payload are applied. `description` accepts
/// an explicit `null` to clear the stored value, which deserializes to
/// `Some(None)` rather than `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title, if supplied.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, if supplied; explicit `null` clears it.
    #[serde(default, deserialize_with = "some_if_present")]
    pub description: Option<Option<String>>,
    /// New completion flag, if supplied.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Wraps any present value (including `null`) in `Some`, so that an
/// omitted field (handled by `#[serde(default)]`) stays distinguishable
/// from an explicit `null`.
fn some_if_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(request: UpdateTaskRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            completed: request.completed,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Response DTO for a task.
///
/// `description` is serialized even when null, matching the persisted
/// row shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Store-assigned task id.
    pub id: i32,
    /// Title of the task.
    pub title: String,
    /// Description of the task, possibly null.
    pub description: Option<String>,
    /// Whether the task is completed.
    pub completed: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
        }
    }
}

/// Response DTO confirming a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskResponse {
    /// Always `true` on success.
    pub ok: bool,
}

// =============================================================================
// Tests
// =============================================================================
