//! Integration tests for Pouch.
//!
//! # Running Tests
//!
//! Database-backed tests are `#[ignore]`d by default and expect a local
//! `PostgreSQL` (override with `DATABASE_URL`):
//!
//! ```bash
//! DATABASE_URL=postgres://pouch@localhost:5432/pouch \
//!     cargo test -p pouch-integration-tests -- --ignored
//! ```
//!
//! Live-server tests additionally expect a running `pouch-server` at
//! `POUCH_TEST_URL` (default `http://127.0.0.1:8080`).

use secrecy::SecretString;
use sqlx::PgPool;

use pouch_server::config::ServerConfig;
use pouch_server::db;
use pouch_server::state::AppState;

/// The connection URL database-backed tests run against.
#[must_use]
pub fn test_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://pouch@localhost:5432/pouch".to_owned())
}

/// The base URL live-server tests run against.
#[must_use]
pub fn test_server_url() -> String {
    std::env::var("POUCH_TEST_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_owned())
}

/// Connect to the test database and apply migrations.
///
/// # Panics
///
/// Panics if the database is unreachable; callers are `#[ignore]`d tests
/// that declare the requirement.
pub async fn test_pool() -> PgPool {
    let url = SecretString::from(test_database_url());
    let pool = db::create_pool(&url).await.expect("database unreachable");
    db::run_migrations(&pool).await.expect("migrations failed");
    pool
}

/// Build an [`AppState`] around an existing pool.
#[must_use]
pub fn state_with_pool(pool: PgPool) -> AppState {
    let config = ServerConfig {
        database_url: SecretString::from(test_database_url()),
        host: std::net::Ipv4Addr::LOCALHOST.into(),
        port: 8080,
        sentry_dsn: None,
    };
    AppState::new(config, pool)
}
