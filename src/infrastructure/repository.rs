//! Repository abstraction for task persistence.
//!
//! The [`TaskRepository`] trait defines the storage interface. Absence of
//! a row is never an error at this layer: point lookups return `None` and
//! deletes return `false`, so callers can distinguish "no such row" from
//! a storage failure.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewTask, Task, TaskPatch};

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone)]
pub enum RepositoryError {
    /// Database connection or query error.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Trait for task storage implementations.
///
/// Implementations must be thread-safe; the repository is shared across
/// request handlers behind an `Arc`.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Assigns a new unique id, persists the row, and returns it
    /// including the assigned id.
    async fn insert(&self, task: NewTask) -> Result<Task, RepositoryError>;

    /// Point lookup by id. Returns `None` if no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError>;

    /// Returns every row in insertion order.
    async fn list(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Applies the supplied fields of `patch` to an existing row and
    /// returns the updated row, or `None` if the id is absent.
    ///
    /// Fields the patch does not carry are left untouched; an empty patch
    /// returns the row unchanged.
    async fn update(&self, id: i32, patch: TaskPatch) -> Result<Option<Task>, RepositoryError>;

    /// Removes the row if present. Returns `false` if the id was absent.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
