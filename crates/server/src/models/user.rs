//! User domain type.

use serde::{Deserialize, Serialize};

/// A user (domain type).
///
/// Users have no storage of their own; they are synthesized on demand when a
/// todo's user edge is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
}
