//! Route handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::repository::{RepositoryError, TodoRepository};
use crate::types::{CreateTodo, Todo};

/// Shared handler state.
pub type Repo = Arc<dyn TodoRepository>;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_todos(State(repo): State<Repo>) -> Result<Json<Vec<Todo>>, StatusCode> {
    repo.all().await.map(Json).map_err(internal_error)
}

pub async fn create_todo(
    State(repo): State<Repo>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let todo = Todo {
        id: Uuid::new_v4(),
        text: input.text.trim().to_string(),
    };
    repo.insert(todo.clone()).await.map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn clear_todos(State(repo): State<Repo>) -> Result<StatusCode, StatusCode> {
    repo.clear().await.map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

fn internal_error(err: RepositoryError) -> StatusCode {
    tracing::error!("repository failure: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
