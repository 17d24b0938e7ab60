// src/common/migrations.rs
//! Database schema management for the document store

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Create the schema. Set `RESET_DB=true` to drop it first.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - dropping the documents table and recreating schema");
        drop_all_tables(pool).await?;
    } else {
        info!("Skipping table drop (RESET_DB not set)");
    }

    create_document_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");
    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS documents")
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_document_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL CHECK (json_valid(body)),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (collection, id)
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Lookups by owner and by email are the hot paths. User emails are unique.
async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_documents_user_id ON documents(collection, json_extract(body, '$.user_id'))",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON documents(json_extract(body, '$.email')) WHERE collection = 'users'",
    ];

    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
