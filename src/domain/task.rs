//! Task domain model.
//!
//! The service persists a single entity: a task with a store-assigned
//! integer id, a required title, an optional description, and a completion
//! flag. [`NewTask`] represents a task before the store has assigned an id;
//! [`TaskPatch`] represents a partial update where only the supplied fields
//! are applied.

use serde::{Deserialize, Serialize};

// =============================================================================
// Task
// =============================================================================

/// A persisted task row.
///
/// The `id` is assigned exactly once by the store at creation time and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned primary key.
    pub id: i32,
    /// Title of the task. Never null in a persisted row.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Whether the task has been completed.
    pub completed: bool,
}

// =============================================================================
// NewTask
// =============================================================================

/// A task before first persistence, i.e. without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Title of the task.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Completion flag; defaults to `false`.
    pub completed: bool,
}

impl NewTask {
    /// Creates a new draft task with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Attaches a store-assigned id, producing a persisted [`Task`].
    #[must_use]
    pub fn into_task(self, id: i32) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

// =============================================================================
// TaskPatch
// =============================================================================

/// A partial update to an existing task.
///
/// Each field records whether the caller supplied it at all: `None` means
/// "leave untouched". For `description` the inner `Option` carries an
/// explicit null, so `Some(None)` clears a previously set description
/// while `None` preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title, if supplied.
    pub title: Option<String>,
    /// New description, if supplied. `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// New completion flag, if supplied.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns `true` if the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Applies the supplied fields to a task, leaving the rest untouched.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
