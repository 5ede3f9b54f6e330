//! In-process [`TodoStore`] for local development and tests.
//!
//! Rows live in a `BTreeMap` keyed by id, so scans return ascending id order
//! like the PostgreSQL store. Ids come from a counter that is never rewound,
//! so a deleted id is not handed out again.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use todos_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoChanges};
use crate::store::TodoStore;

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Todo>,
}

/// Todo store held entirely in memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn list_by_completed(&self, completed: bool) -> Result<Vec<Todo>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let todo = Todo {
            id: inner.last_id,
            name: input.name.clone(),
            // Same day as the table default: the UTC date.
            created_at: chrono::Utc::now().date_naive(),
            completed: input.completed,
        };
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: DbId, changes: &TodoChanges) -> Result<Option<Todo>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.rows.get_mut(&id) else {
            tracing::debug!(todo_id = id, "Update matched no stored todo");
            return Ok(None);
        };

        changes.apply_to(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let deleted = inner.rows.remove(&id).is_some();
        if !deleted {
            tracing::debug!(todo_id = id, "Delete matched no stored todo");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(name: &str) -> NewTodo {
        NewTodo {
            name: name.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_today() {
        let store = MemoryTodoStore::new();
        let a = store.insert(&new_todo("First todo")).await.unwrap();
        let b = store.insert(&new_todo("Second todo")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, chrono::Utc::now().date_naive());
        assert!(!a.completed);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryTodoStore::new();
        let a = store.insert(&new_todo("First todo")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());

        let b = store.insert(&new_todo("Second todo")).await.unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let store = MemoryTodoStore::new();
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_returns_none_and_changes_nothing() {
        let store = MemoryTodoStore::new();
        store.insert(&new_todo("Keep me")).await.unwrap();

        let changes = TodoChanges {
            name: Some("Changed".to_string()),
            completed: Some(true),
        };
        assert!(store.update(99, &changes).await.unwrap().is_none());

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Keep me");
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryTodoStore::new();
        let todo = store.insert(&new_todo("Buy bread")).await.unwrap();

        let changes = TodoChanges {
            name: None,
            completed: Some(true),
        };
        let updated = store.update(todo.id, &changes).await.unwrap().unwrap();

        assert_eq!(updated.name, "Buy bread");
        assert!(updated.completed);
        assert_eq!(updated.created_at, todo.created_at);
    }

    #[tokio::test]
    async fn list_by_completed_filters_in_id_order() {
        let store = MemoryTodoStore::new();
        for name in ["Todo one", "Todo two", "Todo three"] {
            store.insert(&new_todo(name)).await.unwrap();
        }
        let done = TodoChanges {
            completed: Some(true),
            ..Default::default()
        };
        store.update(2, &done).await.unwrap();

        let open: Vec<_> = store
            .list_by_completed(false)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(open, vec![1, 3]);

        let closed = store.list_by_completed(true).await.unwrap();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].id, 2);
    }
}
