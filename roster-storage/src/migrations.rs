//! Database schema migrations

use sqlx::SqlitePool;
use tracing::info;

use crate::{Error, Result};

/// Schema for the users table; idempotent on an already-migrated database
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)
"#;

/// Apply all pending migrations to the given pool
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations");

    sqlx::query(CREATE_USERS)
        .execute(pool)
        .await
        .map_err(|e| Error::Migration(e.to_string()))?;

    info!("Database migrations completed successfully");
    Ok(())
}
