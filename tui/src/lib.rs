//! Terminal front end for the todo service.
//!
//! State lives in [`TodoApp`], rendering in [`ui`]; the two only meet in the
//! binary's event loop. The app is generic over
//! [`TodoService`](todo_client::TodoService), which is how the tests swap in
//! scripted services and how the end-to-end suite runs the real one.

pub mod app;
pub mod ui;

pub use app::TodoApp;
