//! Storage seam for todos.
//!
//! The service layer talks to a `dyn TodoStore` so the same business logic
//! runs against PostgreSQL in production and [`MemoryTodoStore`] in local
//! development and tests.
//!
//! [`MemoryTodoStore`]: crate::memory::MemoryTodoStore

use async_trait::async_trait;
use todos_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoChanges};
use crate::repositories::TodoRepo;
use crate::DbPool;

/// Persistence operations required by the todo service.
///
/// Mutations are conditional on the row existing and happen in one step:
/// `update` returns `None` and `delete` returns `false` when the ID is absent.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// All todos in store order.
    async fn list_all(&self) -> Result<Vec<Todo>, sqlx::Error>;

    /// Todos whose `completed` flag equals `completed`.
    async fn list_by_completed(&self, completed: bool) -> Result<Vec<Todo>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;

    /// Persist a new todo, assigning `id` and `created_at`.
    async fn insert(&self, input: &NewTodo) -> Result<Todo, sqlx::Error>;

    /// Apply `changes` to the todo with `id`.
    async fn update(&self, id: DbId, changes: &TodoChanges) -> Result<Option<Todo>, sqlx::Error>;

    /// Remove the todo with `id`.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`TodoStore`] backed by PostgreSQL through [`TodoRepo`].
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn list_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        TodoRepo::list(&self.pool).await
    }

    async fn list_by_completed(&self, completed: bool) -> Result<Vec<Todo>, sqlx::Error> {
        TodoRepo::list_by_completed(&self.pool, completed).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        TodoRepo::create(&self.pool, input).await
    }

    async fn update(&self, id: DbId, changes: &TodoChanges) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::update(&self.pool, id, changes).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TodoRepo::delete(&self.pool, id).await
    }
}
