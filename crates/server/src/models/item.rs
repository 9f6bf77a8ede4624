//! Item domain types.

use serde::{Deserialize, Serialize};

/// A named item (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Decimal string form of the storage-assigned id.
    pub id: String,
    pub name: String,
}

/// Input for creating an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
}
