//! In-memory record store for todos.
//!
//! # Design
//! A single `RwLock` guards both the records and the id counter, so id
//! allocation and insertion happen under one write guard and two concurrent
//! creates can never observe the same next id. Ids start at 1 and are never
//! reused after a delete.

use std::{collections::BTreeMap, sync::Arc};

use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{Todo, TodoInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {id} not found")]
    NotFound { id: i32 },

    #[error("todo id space exhausted")]
    Exhausted,
}

#[derive(Debug)]
struct Records {
    next_id: i32,
    todos: BTreeMap<i32, Todo>,
}

/// Shared handle to the todo records. Cloning is cheap and every clone sees
/// the same data.
#[derive(Debug, Clone)]
pub struct TodoStore {
    inner: Arc<RwLock<Records>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Records {
                next_id: 1,
                todos: BTreeMap::new(),
            })),
        }
    }

    /// All records in ascending id order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.values().cloned().collect()
    }

    pub async fn list_completed(&self) -> Vec<Todo> {
        self.inner
            .read()
            .await
            .todos
            .values()
            .filter(|todo| todo.is_complete)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i32) -> Result<Todo, StoreError> {
        self.inner
            .read()
            .await
            .todos
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    pub async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let mut records = self.inner.write().await;
        let id = records.next_id;
        records.next_id = id.checked_add(1).ok_or(StoreError::Exhausted)?;

        let todo = Todo {
            id,
            name: input.name,
            is_complete: input.is_complete,
            secret: None,
        };
        records.todos.insert(id, todo.clone());
        tracing::debug!(id, "todo created");
        Ok(todo)
    }

    /// Overwrites `name` and `is_complete` in place. `id` and `secret` are
    /// left untouched.
    pub async fn update(&self, id: i32, input: TodoInput) -> Result<(), StoreError> {
        let mut records = self.inner.write().await;
        let todo = records
            .todos
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        todo.name = input.name;
        todo.is_complete = input.is_complete;
        tracing::debug!(id, "todo updated");
        Ok(())
    }

    /// Removes the record and returns it as it was before removal.
    pub async fn delete(&self, id: i32) -> Result<Todo, StoreError> {
        let removed = self
            .inner
            .write()
            .await
            .todos
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;
        tracing::debug!(id, "todo deleted");
        Ok(removed)
    }
}
