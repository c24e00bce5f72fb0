//! Typed service surface consumed by the UI.
//!
//! # Design
//! The view only ever talks to [`TodoService`]; the trait boundary is what
//! lets view tests substitute a scripted fake for the network. The real
//! implementation composes [`TodoApi`] (build/parse) with the blocking
//! transport.

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::transport;
use crate::types::{CreateTodo, Todo};

/// The two todo operations (plus the list reset) behind typed functions.
pub trait TodoService {
    /// Create a todo with the given text and return the stored record.
    fn add_todo(&self, text: &str) -> Result<Todo, ApiError>;

    /// Fetch every todo, oldest first.
    fn todos(&self) -> Result<Vec<Todo>, ApiError>;

    /// Remove every todo.
    fn clear(&self) -> Result<(), ApiError>;
}

/// [`TodoService`] over real HTTP.
#[derive(Debug)]
pub struct HttpTodoService {
    api: TodoApi,
    agent: ureq::Agent,
}

impl HttpTodoService {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            agent: transport::default_agent(),
        }
    }
}

impl TodoService for HttpTodoService {
    fn add_todo(&self, text: &str) -> Result<Todo, ApiError> {
        let req = self.api.build_create_todo(&CreateTodo::new(text))?;
        let response = transport::execute(&self.agent, &req)?;
        self.api.parse_create_todo(response)
    }

    fn todos(&self) -> Result<Vec<Todo>, ApiError> {
        let req = self.api.build_list_todos();
        let response = transport::execute(&self.agent, &req)?;
        self.api.parse_list_todos(response)
    }

    fn clear(&self) -> Result<(), ApiError> {
        let req = self.api.build_clear_todos();
        let response = transport::execute(&self.agent, &req)?;
        self.api.parse_clear_todos(response)
    }
}
