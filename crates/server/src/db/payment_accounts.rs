//! Payment account repository and row/domain conversions.
//!
//! Payment accounts relate to transactions many-to-many through the
//! `payment` join table. The relation is never populated on creation and is
//! not part of the API shape, so the conversions here only move scalar
//! fields.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pouch_core::PaymentAccountId;

use super::RepositoryError;
use crate::models::{NewPaymentAccount, PaymentAccount};

// =============================================================================
// Row Type and Conversions
// =============================================================================

/// Persisted shape of a payment account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentAccountRow {
    pub id: PaymentAccountId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<PaymentAccountRow> for PaymentAccount {
    fn from(row: PaymentAccountRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
        }
    }
}

/// Insert shape of a payment account.
#[derive(Debug, Clone)]
pub struct PaymentAccountInsert {
    pub name: String,
}

impl From<NewPaymentAccount> for PaymentAccountInsert {
    fn from(input: NewPaymentAccount) -> Self {
        Self { name: input.name }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for payment account database operations.
pub struct PaymentAccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentAccountRepository<'a> {
    /// Create a new payment account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a payment account and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        insert: PaymentAccountInsert,
    ) -> Result<PaymentAccountRow, RepositoryError> {
        let row = sqlx::query_as::<_, PaymentAccountRow>(
            r#"
            INSERT INTO payment_accounts (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at, deleted_at
            "#,
        )
        .bind(insert.name)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all payment accounts, oldest surrogate key first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<PaymentAccountRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, PaymentAccountRow>(
            r#"
            SELECT id, name, created_at, updated_at, deleted_at
            FROM payment_accounts
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
