// In-memory document store

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{check_field, Collection, DocumentStore, DocumentUpdate, StoreError};

/// Documents per collection, kept in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<(String, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// First unique field of `doc` already held by a document other than `id`
fn unique_clash(
    collection: Collection,
    docs: &[(String, Value)],
    id: &str,
    doc: &Value,
) -> Option<StoreError> {
    collection.unique_fields().iter().find_map(|field| {
        let value = doc.get(*field).filter(|v| !v.is_null())?;
        docs.iter()
            .any(|(other_id, other)| other_id != id && other.get(*field) == Some(value))
            .then(|| {
                StoreError::Conflict(format!("{}.{} already exists", collection.as_str(), field))
            })
    })
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .and_then(|docs| docs.iter().find(|(doc_id, _)| doc_id == id))
            .map(|(_, doc)| doc.clone()))
    }

    async fn put(&self, collection: Collection, id: &str, doc: &Value) -> Result<(), StoreError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection).or_default();
        if let Some(err) = unique_clash(collection, docs, id, doc) {
            return Err(err);
        }
        match docs.iter_mut().find(|(doc_id, _)| doc_id == id) {
            Some((_, existing)) => *existing = doc.clone(),
            None => docs.push((id.to_string(), doc.clone())),
        }
        Ok(())
    }

    async fn create(
        &self,
        collection: Collection,
        id: &str,
        doc: &Value,
    ) -> Result<(), StoreError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection).or_default();
        if docs.iter().any(|(doc_id, _)| doc_id == id) {
            return Err(StoreError::Conflict(format!(
                "{} '{}' already exists",
                collection.as_str(),
                id
            )));
        }
        if let Some(err) = unique_clash(collection, docs, id, doc) {
            return Err(err);
        }
        docs.push((id.to_string(), doc.clone()));
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        apply: DocumentUpdate,
    ) -> Result<Option<Value>, StoreError> {
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection).or_default();
        let Some(index) = docs.iter().position(|(doc_id, _)| doc_id == id) else {
            return Ok(None);
        };

        // work on a copy so a failed step leaves the stored document as it was
        let mut updated = docs[index].1.clone();
        apply(&mut updated)?;
        if let Some(err) = unique_clash(collection, docs, id, &updated) {
            return Err(err);
        }
        docs[index].1 = updated.clone();
        Ok(Some(updated))
    }

    async fn query(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        check_field(field)?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, doc)| doc.get(field) == Some(value))
                    .map(|(_, doc)| doc.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}
