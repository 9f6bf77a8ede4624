//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! POST /query - Typed query/mutation dispatcher (the whole API surface)
//! ```
//!
//! Health endpoints (`/health`, `/health/ready`) are registered next to the
//! dispatcher in `main`.

pub mod query;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create all routes for the API server.
pub fn routes() -> Router<AppState> {
    Router::new().route("/query", post(query::execute))
}
