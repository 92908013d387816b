use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{NewTodo, StoreError, TodoChanges, TodoStore};
use crate::models::Todo;

/// In-memory store for development and tests. Mints the same ObjectId-hex
/// identifiers as the MongoDB store so id handling is exercised identically.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Todo>>,
}

#[async_trait::async_trait]
impl TodoStore for MemoryStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let entries = self.entries.read().await;
        // Reverse insertion order first so that a stable sort on createdAt
        // breaks same-millisecond ties newest-first.
        let mut todos: Vec<Todo> = entries.iter().rev().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(todos)
    }

    async fn insert_todo(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: ObjectId::new().to_hex(),
            title: new.title,
            description: new.description,
            completed: false,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.entries.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(
        &self,
        id: &str,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StoreError> {
        let mut entries = self.entries.write().await;
        let Some(todo) = entries.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        todo.title = changes.title;
        todo.description = changes.description;
        todo.completed = changes.completed;
        todo.updated_at = Utc::now();
        Ok(Some(todo.clone()))
    }

    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|t| t.id != id);
        Ok(entries.len() < before)
    }
}
