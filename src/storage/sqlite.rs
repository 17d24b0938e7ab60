// SQLite-backed document store

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, warn};

use super::{check_field, Collection, DocumentStore, DocumentUpdate, StoreError};

/// Documents live in the `documents` table created by
/// `common::migrations`, one row per `(collection, id)`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn update_locked(
        conn: &mut SqliteConnection,
        collection: Collection,
        id: &str,
        apply: DocumentUpdate,
    ) -> Result<Option<Value>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        let Some((body,)) = row else {
            return Ok(None);
        };

        let mut doc: Value = serde_json::from_str(&body)?;
        apply(&mut doc)?;

        sqlx::query(
            r#"
            UPDATE documents
            SET body = ?, updated_at = CURRENT_TIMESTAMP
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(serde_json::to_string(&doc)?)
        .bind(collection.as_str())
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(Some(doc))
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((body,)) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, collection: Collection, id: &str, doc: &Value) -> Result<(), StoreError> {
        let body = serde_json::to_string(doc)?;
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES (?, ?, ?)
            ON CONFLICT(collection, id) DO UPDATE SET
                body = excluded.body,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await?;

        debug!(collection = collection.as_str(), id = %id, "Document stored");
        Ok(())
    }

    async fn create(
        &self,
        collection: Collection,
        id: &str,
        doc: &Value,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_string(doc)?;
        // unique indexes from common::migrations reject duplicates
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)")
            .bind(collection.as_str())
            .bind(id)
            .bind(body)
            .execute(&self.pool)
            .await?;

        debug!(collection = collection.as_str(), id = %id, "Document created");
        Ok(())
    }

    /// Runs under `BEGIN IMMEDIATE`, which takes the database write lock
    /// before the read, so concurrent updates apply one after another.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        apply: DocumentUpdate,
    ) -> Result<Option<Value>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;

        let result = Self::update_locked(&mut *conn, collection, id, apply).await;

        let finish = if result.is_ok() { "COMMIT" } else { "ROLLBACK" };
        if let Err(e) = sqlx::query(finish).execute(&mut *conn).await {
            warn!(
                collection = collection.as_str(),
                id = %id,
                error = %e,
                "Failed to end update transaction"
            );
            return Err(e.into());
        }

        if result.is_ok() {
            debug!(collection = collection.as_str(), id = %id, "Document updated");
        }
        result
    }

    async fn query(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        check_field(field)?;

        // json_extract on a scalar JSON literal yields the same SQL value that
        // json_extract yields for the stored field, so one comparison covers
        // strings, numbers and booleans alike.
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT body FROM documents
            WHERE collection = ?
              AND json_extract(body, '$.' || ?) = json_extract(?, '$')
            ORDER BY rowid
            "#,
        )
        .bind(collection.as_str())
        .bind(field)
        .bind(serde_json::to_string(value)?)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(body,)| serde_json::from_str(&body).map_err(StoreError::from))
            .collect()
    }
}
