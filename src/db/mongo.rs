use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Client, Collection,
};
use serde::{Deserialize, Serialize};

use super::{NewTodo, StoreError, TodoChanges, TodoStore};
use crate::models::Todo;

const COLLECTION: &str = "todos";

#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
}

/// Storage-side shape of a todo: ObjectId `_id`, native BSON datetimes.
/// Converted to the wire [`Todo`] at the boundary.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    completed: bool,
    created_at: DateTime,
    updated_at: DateTime,
}

impl MongoStore {
    /// Connects and pings the deployment. `with_uri_str` does not touch the
    /// network, so the ping is what makes an unreachable store fail startup.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(MongoStore {
            collection: db.collection(COLLECTION),
        })
    }
}

#[async_trait::async_trait]
impl TodoStore for MongoStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self.collection.find(doc! {}, options).await?;
        let documents: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Todo::from).collect())
    }

    async fn insert_todo(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let document = TodoDocument {
            id: ObjectId::new(),
            title: new.title,
            description: new.description,
            completed: false,
            created_at: DateTime::from_chrono(new.created_at),
            updated_at: DateTime::from_chrono(new.updated_at),
        };
        self.collection.insert_one(&document, None).await?;
        Ok(document.into())
    }

    async fn update_todo(
        &self,
        id: &str,
        changes: TodoChanges,
    ) -> Result<Option<Todo>, StoreError> {
        // An id that is not a valid ObjectId cannot match any document.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let update = doc! { "$set": {
            "title": changes.title,
            "description": changes.description.map(Bson::String).unwrap_or(Bson::Null),
            "completed": changes.completed,
            "updated_at": DateTime::from_chrono(Utc::now()),
        }};
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update, options)
            .await?;
        Ok(updated.map(Todo::from))
    }

    async fn delete_todo(&self, id: &str) -> Result<bool, StoreError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?;
        Ok(deleted.is_some())
    }
}

impl From<TodoDocument> for Todo {
    fn from(document: TodoDocument) -> Self {
        Todo {
            id: document.id.to_hex(),
            title: document.title,
            description: document.description,
            completed: document.completed,
            created_at: document.created_at.to_chrono(),
            updated_at: document.updated_at.to_chrono(),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}
