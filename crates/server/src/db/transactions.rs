//! Transaction repository and row/domain conversions.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pouch_core::TransactionId;

use super::RepositoryError;
use crate::models::Transaction;

// =============================================================================
// Row Type and Conversions
// =============================================================================

/// Persisted shape of a transaction.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: TransactionId,
    /// Assigned by the database on insert, never mutated afterwards.
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Self {
            id: row.id.to_string(),
        }
    }
}

/// Insert shape of a transaction.
///
/// Intentionally empty: the API transaction carries only an id, so creation
/// discards all input and the stored row gets its timestamp from the
/// database default.
#[derive(Debug, Clone, Default)]
pub struct TransactionInsert;

impl From<Transaction> for TransactionInsert {
    fn from(_: Transaction) -> Self {
        Self
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for transaction database operations.
pub struct TransactionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TransactionRepository<'a> {
    /// Create a new transaction repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a bare transaction row and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, _insert: TransactionInsert) -> Result<TransactionRow, RepositoryError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions DEFAULT VALUES
            RETURNING id, timestamp, created_at, updated_at, deleted_at
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all transactions, oldest surrogate key first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<TransactionRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, timestamp, created_at, updated_at, deleted_at
            FROM transactions
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
