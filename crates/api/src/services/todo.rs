//! Todo business logic.
//!
//! Enforces the name rules, patch semantics, and not-found handling on top of
//! a [`TodoStore`]. Every mutation is a single conditional store call, so a
//! missing id is detected by the write itself rather than by a prior read.

use std::sync::Arc;

use todos_core::dto::{CreateTodoRequest, TodoDto};
use todos_core::error::CoreError;
use todos_core::todo::{self, PatchTodo, UpdateTodo};
use todos_core::types::DbId;
use todos_db::mapper;
use todos_db::models::todo::{Todo, TodoChanges};
use todos_db::store::TodoStore;

use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: todo::ENTITY,
        id,
    })
}

/// Todo operations over a shared store handle. Cheap to clone.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }

    /// All todos in store order.
    pub async fn list_all(&self) -> AppResult<Vec<TodoDto>> {
        let todos = self.store.list_all().await?;
        Ok(todos.into_iter().map(mapper::to_dto).collect())
    }

    /// Todos whose `completed` flag equals `completed`.
    pub async fn list_by_completed(&self, completed: bool) -> AppResult<Vec<TodoDto>> {
        let todos = self.store.list_by_completed(completed).await?;
        Ok(todos.into_iter().map(mapper::to_dto).collect())
    }

    pub async fn get(&self, id: DbId) -> AppResult<TodoDto> {
        self.store
            .find_by_id(id)
            .await?
            .map(mapper::to_dto)
            .ok_or_else(|| not_found(id))
    }

    /// Create a todo. New todos always start incomplete.
    pub async fn create(&self, request: &CreateTodoRequest) -> AppResult<TodoDto> {
        todo::validate_name(request.name())?;

        let todo = self.store.insert(&mapper::new_todo(request)).await?;

        tracing::info!(todo_id = todo.id, name = %todo.name, "Todo created");
        Ok(mapper::to_dto(todo))
    }

    /// Replace only the name of a todo.
    pub async fn rename(&self, id: DbId, name: &str) -> AppResult<TodoDto> {
        todo::validate_name(name)?;

        let changes = TodoChanges {
            name: Some(name.to_string()),
            completed: None,
        };
        let todo = self.apply(id, &changes).await?;

        tracing::info!(todo_id = id, "Todo renamed");
        Ok(mapper::to_dto(todo))
    }

    /// Replace both mutable fields.
    pub async fn update(&self, input: UpdateTodo) -> AppResult<TodoDto> {
        todo::validate_name(&input.name)?;

        let changes = TodoChanges {
            name: Some(input.name),
            completed: Some(input.completed),
        };
        let todo = self.apply(input.id, &changes).await?;

        tracing::info!(todo_id = todo.id, completed = todo.completed, "Todo updated");
        Ok(mapper::to_dto(todo))
    }

    /// Change only the supplied fields.
    ///
    /// A supplied name that is blank or too short is ignored rather than
    /// rejected. A patch with nothing applicable still fails for a missing id.
    pub async fn patch(&self, input: PatchTodo) -> AppResult<TodoDto> {
        let input = input.without_invalid_name();
        let changes = TodoChanges {
            name: input.name,
            completed: input.completed,
        };

        let todo = if changes.is_empty() {
            self.store
                .find_by_id(input.id)
                .await?
                .ok_or_else(|| not_found(input.id))?
        } else {
            self.apply(input.id, &changes).await?
        };

        tracing::info!(
            todo_id = todo.id,
            name_changed = changes.name.is_some(),
            completed_changed = changes.completed.is_some(),
            "Todo patched",
        );
        Ok(mapper::to_dto(todo))
    }

    /// Set the `completed` flag.
    pub async fn toggle_completed(&self, id: DbId, completed: bool) -> AppResult<TodoDto> {
        let changes = TodoChanges {
            name: None,
            completed: Some(completed),
        };
        let todo = self.apply(id, &changes).await?;

        tracing::info!(todo_id = id, completed, "Todo completion toggled");
        Ok(mapper::to_dto(todo))
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }

    async fn apply(&self, id: DbId, changes: &TodoChanges) -> AppResult<Todo> {
        self.store
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }
}
