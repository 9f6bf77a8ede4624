//! In-process todo list.
//!
//! Todos never touch the database: the list lives in [`crate::state::AppState`]
//! for the lifetime of the process and is lost on restart. Requests run
//! concurrently, so access is serialized through an `RwLock` — appends never
//! lose entries and reads never observe a half-written list.

use std::sync::RwLock;

use crate::models::Todo;

/// Append-only, synchronized todo list.
#[derive(Debug, Default)]
pub struct TodoStore {
    entries: RwLock<Vec<Todo>>,
}

impl TodoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a todo to the list.
    pub fn add(&self, todo: Todo) {
        self.entries
            .write()
            .expect("todo list lock poisoned")
            .push(todo);
    }

    /// Snapshot the current list, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        self.entries
            .read()
            .expect("todo list lock poisoned")
            .clone()
    }

    /// Number of todos currently in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().expect("todo list lock poisoned").len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
