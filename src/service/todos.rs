use crate::db::{Todo, TodoStorage};
use crate::error::{TodoError, ValidationError};
use tracing::info;

/// Validated list/add/complete/delete over [`TodoStorage`].
///
/// Holds no cached rows; every call goes straight to storage.
#[derive(Clone)]
pub struct TodoService {
    storage: TodoStorage,
}

impl TodoService {
    pub fn new(storage: TodoStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &TodoStorage {
        &self.storage
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.storage.list_all().await
    }

    /// Create an incomplete todo. Blank fields are rejected before storage is touched.
    pub async fn add_todo(&self, title: &str, description: &str) -> Result<i64, TodoError> {
        require("title", title)?;
        require("description", description)?;

        let id = self.storage.insert(title, description).await?;
        info!(id, "todo added");
        Ok(id)
    }

    /// Mark a todo complete. Completing an already complete todo succeeds.
    pub async fn complete_todo(&self, id: i64) -> Result<(), TodoError> {
        self.storage.update_complete(id, true).await?;
        info!(id, "todo completed");
        Ok(())
    }

    pub async fn delete_todo(&self, id: i64) -> Result<(), TodoError> {
        self.storage.delete(id).await?;
        info!(id, "todo deleted");
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
