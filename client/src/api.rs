//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`];
//! the transport executes the round-trip in between. Parsing checks the
//! status code first, so a failed request never turns into a confusing
//! deserialization error.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo};

/// Stateless builder/parser for the todo API operations.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /todos` — list every todo.
    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `POST /todos` — create a todo from the given payload.
    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// `DELETE /todos` — remove every todo.
    pub fn build_clear_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_clear_todos(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
