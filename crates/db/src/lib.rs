//! SQLite-backed catalog store.
//!
//! Owns the movie catalog and the playback-event log. The HTTP layer talks
//! to this crate exclusively through the repository structs in
//! [`repositories`]; it never constructs log rows itself.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// Accepts either a file URL (`sqlite://catalog.db`) or `sqlite::memory:`.
/// File databases are created on first use.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // An in-memory database lives and dies with its connection, so the pool
    // must hold exactly one connection and never reclaim it.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
