use std::sync::Arc;

use anyhow::Context;
use todo_server::{InMemoryRepository, SqliteRepository, TodoRepository};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let allowed_origin =
        std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let allowed_origin = allowed_origin
        .parse()
        .with_context(|| format!("invalid ALLOWED_ORIGIN {allowed_origin:?}"))?;

    let repo: Arc<dyn TodoRepository> = match std::env::var("TODO_DB") {
        Ok(path) => {
            info!("using sqlite database at {path}");
            Arc::new(SqliteRepository::open(&path).context("failed to open database")?)
        }
        Err(_) => {
            info!("using in-memory store");
            Arc::new(InMemoryRepository::new())
        }
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    todo_server::run(listener, repo, allowed_origin).await?;
    Ok(())
}
