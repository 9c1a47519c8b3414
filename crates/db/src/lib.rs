//! SQLite persistence for notes.
//!
//! Owns the connection pool, the `notes` table schema, and the repository
//! layer. The pool is created once at startup and shared for the process
//! lifetime; SQLite serializes conflicting writes itself.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Schema for the single `notes` table. Safe to run against an existing
/// database: it never drops or alters rows.
const CREATE_NOTES_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT DEFAULT 'Others',
        completed BOOLEAN DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Create a connection pool from a `sqlite:` database URL.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether the `notes` table is present in the connected database.
pub async fn notes_table_exists(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes'",
    )
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Ensure the `notes` table exists.
///
/// Must complete before the server accepts traffic.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
    tracing::info!("Notes table ready");
    Ok(())
}
