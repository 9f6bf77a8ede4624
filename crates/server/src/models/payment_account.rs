//! Payment account domain types.

use serde::{Deserialize, Serialize};

/// A payment account (domain type).
///
/// Accounts participate in transactions through a many-to-many relation; the
/// relation itself lives entirely below the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccount {
    /// Decimal string form of the storage-assigned id.
    pub id: String,
    /// Display name for the account.
    pub name: String,
}

/// Input for creating a payment account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentAccount {
    pub name: String,
}
