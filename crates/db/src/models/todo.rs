//! Todo entity and write models.

use serde::Serialize;
use sqlx::FromRow;
use todos_core::types::{Date, DbId};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub name: String,
    pub created_at: Date,
    pub completed: bool,
}

/// Fields supplied when inserting a todo. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub completed: bool,
}

/// Column changes for an existing todo. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    /// Whether applying these changes would modify nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.completed.is_none()
    }

    /// Apply the changes to an in-memory row.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(name) = &self.name {
            todo.name.clone_from(name);
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
