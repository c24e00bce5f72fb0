//! Wire types for the todo API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
}

/// Body of a create request.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}
