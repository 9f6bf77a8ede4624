//! Item repository and row/domain conversions.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pouch_core::ItemId;

use super::RepositoryError;
use crate::models::{Item, NewItem};

// =============================================================================
// Row Type and Conversions
// =============================================================================

/// Persisted shape of an item.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
        }
    }
}

/// Insert shape of an item. The surrogate key and audit columns are assigned
/// by the database.
#[derive(Debug, Clone)]
pub struct ItemInsert {
    pub name: String,
}

impl From<NewItem> for ItemInsert {
    fn from(input: NewItem) -> Self {
        Self { name: input.name }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for item database operations.
pub struct ItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an item and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, insert: ItemInsert) -> Result<ItemRow, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at, deleted_at
            "#,
        )
        .bind(insert.name)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List all items, oldest surrogate key first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_all(&self) -> Result<Vec<ItemRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, created_at, updated_at, deleted_at
            FROM items
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
