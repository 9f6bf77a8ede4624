//! Transaction domain type.

use serde::{Deserialize, Serialize};

/// A transaction (domain type).
///
/// The API shape carries only the identifier; the timestamp and the relation
/// to payment accounts stay in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
}
