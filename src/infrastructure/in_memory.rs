//! In-memory repository implementation.
//!
//! Thread-safe map-backed storage with a monotonically increasing id
//! counter, mirroring the database's id-assignment guarantees (ids are
//! never reused). Suitable for tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewTask, Task, TaskPatch};
use crate::infrastructure::{RepositoryError, TaskRepository};

/// In-memory implementation of [`TaskRepository`].
///
/// Uses a `BTreeMap` so listing returns rows in id (insertion) order,
/// matching the `SERIAL`-keyed table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    /// Thread-safe storage keyed by task id.
    tasks: Arc<RwLock<BTreeMap<i32, Task>>>,
    /// Next id to assign. Monotonic, never reused after deletes.
    next_id: Arc<AtomicI32>,
}

impl InMemoryTaskRepository {
    /// Creates a new empty in-memory task repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(0)),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: NewTask) -> Result<Task, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = task.into_task(id);

        self.tasks.write().await.insert(id, task.clone());

        Ok(task)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn update(&self, id: i32, patch: TaskPatch) -> Result<Option<Task>, RepositoryError> {
        let mut tasks = self.tasks.write().await;

        Ok(tasks.get_mut(&id).map(|task| {
            patch.apply_to(task);
            task.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repository = InMemoryTaskRepository::new();

        let first = repository.insert(NewTask::new("First")).await.unwrap();
        let second = repository.insert(NewTask::new("Second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repository = InMemoryTaskRepository::new();

        let first = repository.insert(NewTask::new("First")).await.unwrap();
        assert!(repository.delete(first.id).await.unwrap());

        let second = repository.insert(NewTask::new("Second")).await.unwrap();

        assert_ne!(second.id, first.id);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_distinguishes_absence() {
        let repository = InMemoryTaskRepository::new();

        let created = repository.insert(NewTask::new("Buy milk")).await.unwrap();

        assert_eq!(
            repository.find_by_id(created.id).await.unwrap(),
            Some(created)
        );
        assert!(repository.find_by_id(999_999).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_rows_in_insertion_order() {
        let repository = InMemoryTaskRepository::new();

        for title in ["First", "Second", "Third"] {
            repository.insert(NewTask::new(title)).await.unwrap();
        }

        let tasks = repository.list().await.unwrap();
        let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let repository = InMemoryTaskRepository::new();

        let created = repository
            .insert(NewTask::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();

        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };
        let updated = repository.update(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description.as_deref(), Some("2 liters"));
        assert!(updated.completed);
    }

    #[rstest]
    #[tokio::test]
    async fn update_returns_none_for_missing_row() {
        let repository = InMemoryTaskRepository::new();

        let patch = TaskPatch {
            title: Some("Does not exist".to_string()),
            ..TaskPatch::default()
        };

        assert!(repository.update(42, patch).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_absence() {
        let repository = InMemoryTaskRepository::new();

        let created = repository.insert(NewTask::new("Buy milk")).await.unwrap();

        assert!(repository.delete(created.id).await.unwrap());
        assert!(!repository.delete(created.id).await.unwrap());
    }
}
