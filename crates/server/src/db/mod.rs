//! Database operations for the Pouch `PostgreSQL`.
//!
//! # Tables
//!
//! - `items` - Named items (32-bit surrogate key)
//! - `payment_accounts` - Payment accounts (64-bit surrogate key)
//! - `transactions` - Transactions with a store-assigned timestamp
//! - `payment` - Join relation between payment accounts and transactions
//!
//! All tables carry `created_at` / `updated_at` / `deleted_at` audit columns;
//! reads filter soft-deleted rows (`deleted_at IS NULL`).
//!
//! # Migrations
//!
//! Migrations live in `crates/server/migrations/` and are embedded via
//! `sqlx::migrate!`. They run at process start, before the server begins
//! accepting requests.
//!
//! Queries use runtime `sqlx::query_as` binding rather than the compile-time
//! checked macros, so the workspace builds without a reachable database.

pub mod items;
pub mod payment_accounts;
pub mod transactions;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use items::{ItemInsert, ItemRepository, ItemRow};
pub use payment_accounts::{PaymentAccountInsert, PaymentAccountRepository, PaymentAccountRow};
pub use transactions::{TransactionInsert, TransactionRepository, TransactionRow};

/// Errors that can occur during repository operations.
///
/// Always recoverable: surfaced to the caller as part of the failed
/// operation's result, never by terminating the process.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending embedded migrations.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
