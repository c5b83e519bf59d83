//! `PostgreSQL` repository implementation.
//!
//! Backed by `sqlx` with a `PgPool` for connection management. The table
//! layout is a single `tasks` table with an integer primary key assigned
//! by the database:
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id          SERIAL PRIMARY KEY,
//!     title       TEXT NOT NULL,
//!     description TEXT,
//!     completed   BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewTask, Task, TaskPatch};
use crate::infrastructure::{RepositoryError, TaskRepository};

/// Row shape shared by all task queries.
type TaskRow = (i32, String, Option<String>, bool);

/// Column list matching [`TaskRow`].
const TASK_COLUMNS: &str = "id, title, description, completed";

fn row_to_task(row: TaskRow) -> Task {
    let (id, title, description, completed) = row;
    Task {
        id,
        title,
        description,
        completed,
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(error.to_string())
}

/// `PostgreSQL` implementation of [`TaskRepository`].
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    /// Connection pool for `PostgreSQL`.
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new `PostgreSQL` task repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table if it does not exist.
    ///
    /// Runs once at startup, mirroring the persisted state layout above.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DatabaseError` if the DDL statement fails.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (\
                 id          SERIAL PRIMARY KEY, \
                 title       TEXT NOT NULL, \
                 description TEXT, \
                 completed   BOOLEAN NOT NULL DEFAULT FALSE\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: NewTask) -> Result<Task, RepositoryError> {
        let sql = format!(
            "INSERT INTO tasks (title, description, completed) \
             VALUES ($1, $2, $3) \
             RETURNING {TASK_COLUMNS}"
        );

        let row: TaskRow = sqlx::query_as(&sql)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.completed)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row_to_task(row))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");

        let row: Option<TaskRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(row_to_task))
    }

    async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id ASC");

        let rows: Vec<TaskRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn update(&self, id: i32, patch: TaskPatch) -> Result<Option<Task>, RepositoryError> {
        // An empty patch touches nothing; return the current row.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        // Build the SET clause dynamically from the fields the patch carries.
        let mut assignments = Vec::new();
        let mut bind_index = 1;

        if patch.title.is_some() {
            assignments.push(format!("title = ${bind_index}"));
            bind_index += 1;
        }
        if patch.description.is_some() {
            assignments.push(format!("description = ${bind_index}"));
            bind_index += 1;
        }
        if patch.completed.is_some() {
            assignments.push(format!("completed = ${bind_index}"));
            bind_index += 1;
        }

        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ${bind_index} RETURNING {TASK_COLUMNS}",
            assignments.join(", ")
        );

        let mut query = sqlx::query_as::<_, TaskRow>(&sql);

        if let Some(title) = patch.title {
            query = query.bind(title);
        }
        if let Some(description) = patch.description {
            // Binds NULL when the caller explicitly cleared the description.
            query = query.bind(description);
        }
        if let Some(completed) = patch.completed {
            query = query.bind(completed);
        }

        let row: Option<TaskRow> = query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(row_to_task))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // -------------------------------------------------------------------------
    // Integration Tests (require PostgreSQL)
    // -------------------------------------------------------------------------

    // Note: These tests require a running PostgreSQL instance reachable via
    // DATABASE_URL. They are disabled by default but can be enabled for
    // integration testing.

    async fn connect() -> PostgresTaskRepository {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/test".into());
        let pool = PgPool::connect(&database_url).await.unwrap();
        let repository = PostgresTaskRepository::new(pool);
        repository.ensure_schema().await.unwrap();
        repository
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn insert_assigns_id_and_returns_row() {
        let repository = connect().await;

        let created = repository
            .insert(NewTask::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description.as_deref(), Some("2 liters"));
        assert!(!created.completed);

        // Cleanup
        let _ = repository.delete(created.id).await;
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn find_by_id_returns_created_row() {
        let repository = connect().await;

        let created = repository.insert(NewTask::new("Buy milk")).await.unwrap();
        let found = repository.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created.clone()));

        // Cleanup
        let _ = repository.delete(created.id).await;
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn find_by_id_returns_none_for_missing_row() {
        let repository = connect().await;

        let found = repository.find_by_id(999_999).await.unwrap();

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn partial_update_leaves_other_fields_untouched() {
        let repository = connect().await;

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

        // Cleanup
        let _ = repository.delete(created.id).await;
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn update_with_explicit_null_clears_description() {
        let repository = connect().await;

        let created = repository
            .insert(NewTask::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();

        let patch = TaskPatch {
            description: Some(None),
            ..TaskPatch::default()
        };
        let updated = repository.update(created.id, patch).await.unwrap().unwrap();

        assert!(updated.description.is_none());

        // Cleanup
        let _ = repository.delete(created.id).await;
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn update_returns_none_for_missing_row() {
        let repository = connect().await;

        let patch = TaskPatch {
            title: Some("Does not exist".to_string()),
            ..TaskPatch::default()
        };
        let updated = repository.update(999_999, patch).await.unwrap();

        assert!(updated.is_none());
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn delete_removes_row() {
        let repository = connect().await;

        let created = repository.insert(NewTask::new("Buy milk")).await.unwrap();

        assert!(repository.delete(created.id).await.unwrap());
        assert!(repository.find_by_id(created.id).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "Requires PostgreSQL instance"]
    async fn delete_returns_false_for_missing_row() {
        let repository = connect().await;

        assert!(!repository.delete(999_999).await.unwrap());
    }
}
