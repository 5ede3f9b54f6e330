//! Repository for the `todos` table.

use sqlx::PgPool;
use todos_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoChanges};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, name, created_at, completed";

/// Provides data access for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// List todos whose `completed` flag equals `completed`, oldest first.
    pub async fn list_by_completed(
        pool: &PgPool,
        completed: bool,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE completed = $1 ORDER BY id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(completed)
            .fetch_all(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo. `id` and `created_at` come from column defaults.
    pub async fn create(pool: &PgPool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (name, completed) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.name)
            .bind(input.completed)
            .fetch_one(pool)
            .await
    }

    /// Update a todo in a single statement.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None` if
    /// no row has the given ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET \
                 name = COALESCE($2, name), \
                 completed = COALESCE($3, completed) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.completed)
            .fetch_optional(pool)
            .await?;

        if todo.is_none() {
            tracing::debug!(todo_id = id, "Update matched no todo row");
        }
        Ok(todo)
    }

    /// Delete a todo by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::debug!(todo_id = id, "Delete matched no todo row");
        }
        Ok(deleted)
    }
}
