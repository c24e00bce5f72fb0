//! SQLite-backed repository.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::repository::{RepositoryError, TodoRepository};
use crate::types::Todo;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id TEXT PRIMARY KEY,
        text TEXT NOT NULL
    );
";

/// Durable store backed by a SQLite database file.
///
/// rusqlite's API is synchronous, so the shared connection sits behind a
/// mutex and every call runs on tokio's blocking pool.
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Open or create the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        Self::initialize(Connection::open(path)?)
    }

    /// Open a private in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self, RepositoryError> {
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn insert(&self, todo: Todo) -> Result<(), RepositoryError> {
        let conn = self.connection();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap_or_else(|e| e.into_inner());
            conn.execute(
                "INSERT INTO todos (id, text) VALUES (?1, ?2)",
                params![todo.id.to_string(), todo.text],
            )?;
            Ok(())
        })
        .await?
    }

    async fn all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let conn = self.connection();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap_or_else(|e| e.into_inner());
            let mut stmt = conn.prepare("SELECT id, text FROM todos ORDER BY rowid")?;
            let rows = stmt.query_map([], |row| {
                let id: String = row.get(0)?;
                let text: String = row.get(1)?;
                Ok((id, text))
            })?;

            let mut todos = Vec::new();
            for row in rows {
                let (id, text) = row?;
                let id = id.parse::<Uuid>().map_err(|err| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(err),
                    )
                })?;
                todos.push(Todo { id, text });
            }
            Ok(todos)
        })
        .await?
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        let conn = self.connection();
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap_or_else(|e| e.into_inner());
            conn.execute("DELETE FROM todos", [])?;
            Ok(())
        })
        .await?
    }
}
