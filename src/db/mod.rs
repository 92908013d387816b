pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::Todo;

/// Fields of a todo about to be persisted for the first time. The store
/// assigns the identifier; `completed` always starts false.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the mutable fields. The store refreshes `updatedAt`.
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Persistence seam for the todo collection. One method per operation;
/// update/delete report an unknown id as `None`/`false` rather than an
/// error so the handler layer decides how to surface it.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest first (`createdAt` descending).
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError>;

    async fn insert_todo(&self, new: NewTodo) -> Result<Todo, StoreError>;

    /// Returns the post-update record, or `None` if `id` matches nothing.
    async fn update_todo(&self, id: &str, changes: TodoChanges)
        -> Result<Option<Todo>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError>;
}
