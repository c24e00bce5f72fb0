//! Storage behind the API.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::Todo;

/// Failures surfaced by a repository backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Storage operations the handlers depend on.
///
/// `all` returns todos in insertion order.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, todo: Todo) -> Result<(), RepositoryError>;
    async fn all(&self) -> Result<Vec<Todo>, RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}

/// In-memory store, used by tests and as the fallback backend when no
/// database path is configured.
#[derive(Default)]
pub struct InMemoryRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn insert(&self, todo: Todo) -> Result<(), RepositoryError> {
        self.todos.write().await.push(todo);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Todo>, RepositoryError> {
        Ok(self.todos.read().await.clone())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.todos.write().await.clear();
        Ok(())
    }
}
