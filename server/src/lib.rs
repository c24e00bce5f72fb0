//! HTTP API serving the todo list.
//!
//! # Design
//! Handlers talk to storage through the [`TodoRepository`] trait. The binary
//! picks a SQLite or in-memory backend at startup; tests inject their own.
//! CORS is a plain middleware layer so the router itself stays untouched.

mod cors;
mod handlers;
pub mod repository;
pub mod sqlite;
pub mod types;

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tokio::net::TcpListener;

use crate::cors::CorsConfig;
pub use crate::repository::{InMemoryRepository, RepositoryError, TodoRepository};
pub use crate::sqlite::SqliteRepository;
pub use crate::types::{CreateTodo, Todo};

/// Build the router with every route and layer attached.
pub fn app(repo: Arc<dyn TodoRepository>, allowed_origin: HeaderValue) -> Router {
    let cors = CorsConfig { allowed_origin };
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .delete(handlers::clear_todos),
        )
        .layer(middleware::from_fn_with_state(cors, cors::apply))
        .with_state(repo)
}

/// Serve the API on an already-bound listener.
pub async fn run(
    listener: TcpListener,
    repo: Arc<dyn TodoRepository>,
    allowed_origin: HeaderValue,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repo, allowed_origin)).await
}
