//! # Storage Module
//!
//! Persistence is modelled as named collections of JSON documents, looked up
//! by id or by a single top-level field. Handlers only ever see the
//! [`DocumentStore`] trait:
//! - [`SqliteStore`] keeps documents in one `documents` table (production)
//! - [`MemoryStore`] keeps them in a locked map (tests, local experiments)

pub mod memory;
pub mod sqlite;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Named document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Assessments,
    AssessmentResponses,
    PsychometricTests,
    Recommendations,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Assessments => "assessments",
            Collection::AssessmentResponses => "assessment_responses",
            Collection::PsychometricTests => "psychometric_tests",
            Collection::Recommendations => "recommendations",
        }
    }

    /// Top-level fields no two documents in the collection may share
    pub fn unique_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Users => &["email"],
            _ => &[],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid query field: {0}")]
    InvalidField(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            Some(db) if db.is_unique_violation() => StoreError::Conflict(db.message().to_string()),
            _ => StoreError::Backend(e.to_string()),
        }
    }
}

/// Read-modify-write step applied by [`DocumentStore::update`]. An `Err`
/// leaves the stored document untouched.
pub type DocumentUpdate = Box<dyn FnOnce(&mut Value) -> Result<(), StoreError> + Send>;

/// Collection-oriented document storage.
///
/// `put` is an upsert. `create` inserts only, failing with
/// [`StoreError::Conflict`] when the id or one of the collection's
/// [`Collection::unique_fields`] is taken. `update` runs its step atomically
/// with respect to every other write. `query` returns every document whose
/// top-level `field` equals `value`, in insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError>;

    async fn put(&self, collection: Collection, id: &str, doc: &Value) -> Result<(), StoreError>;

    async fn create(&self, collection: Collection, id: &str, doc: &Value)
        -> Result<(), StoreError>;

    /// Returns the updated document, or `None` when `id` does not exist
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        apply: DocumentUpdate,
    ) -> Result<Option<Value>, StoreError>;

    async fn query(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError>;
}

/// Typed helpers over any [`DocumentStore`], including `dyn DocumentStore`
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    async fn get_as<T>(&self, collection: Collection, id: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match self.get(collection, id).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn put_as<T>(&self, collection: Collection, id: &str, doc: &T) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(doc)?;
        self.put(collection, id, &value).await
    }

    async fn create_as<T>(&self, collection: Collection, id: &str, doc: &T) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(doc)?;
        self.create(collection, id, &value).await
    }

    async fn update_as<T, F>(
        &self,
        collection: Collection,
        id: &str,
        apply: F,
    ) -> Result<Option<T>, StoreError>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce(&mut T) + Send + 'static,
    {
        let step: DocumentUpdate = Box::new(move |doc: &mut Value| -> Result<(), StoreError> {
            let mut typed: T = serde_json::from_value(doc.take())?;
            apply(&mut typed);
            *doc = serde_json::to_value(&typed)?;
            Ok(())
        });

        match self.update(collection, id, step).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    async fn query_as<T>(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.query(collection, field, value)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }
}

impl<S: DocumentStore + ?Sized> DocumentStoreExt for S {}

/// Query fields are plain top-level keys; anything else is rejected before it
/// reaches a backend.
pub(crate) fn check_field(field: &str) -> Result<(), StoreError> {
    let valid = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidField(field.to_string()))
    }
}
