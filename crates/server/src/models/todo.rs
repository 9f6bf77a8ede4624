//! Todo domain types.
//!
//! Todos are never persisted; they live in process memory for the lifetime
//! of the server and are lost on restart.

use serde::{Deserialize, Serialize};

/// A todo entry (domain type, in-memory only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Randomly generated at creation, `"T"` followed by decimal digits.
    pub id: String,
    pub text: String,
    /// References a [`crate::models::User`] by id, resolved lazily.
    pub user_id: String,
}

/// Input for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    pub user_id: String,
}
