//! Synchronous client for the todo API.
//!
//! # Overview
//! Two layers: a deterministic core that builds `HttpRequest` values and
//! parses `HttpResponse` values without touching the network, and a thin
//! blocking transport that executes the round-trip with ureq. The
//! [`TodoService`] trait on top exposes the operations as typed functions
//! (`add_todo`, `todos`, `clear`) so a UI can swap the whole stack for a
//! scripted fake in tests.
//!
//! # Design
//! - `TodoApi` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the contract and
//!   integration suites catch schema drift.

pub mod api;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{HttpTodoService, TodoService};
pub use types::{CreateTodo, Todo};
