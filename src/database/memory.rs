//! Document store en memoria
//!
//! Implementación por defecto cuando no hay PostgreSQL configurado. Los
//! ObjectId crecen con el tiempo y el contador, así que el orden del
//! `BTreeMap` coincide con el orden de inserción dentro de un proceso.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{normalize_object_id, object_id, Document, DocumentStore, StoreError};

type Collection = BTreeMap<String, Value>;

#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de documentos en una colección
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Inserta con un id ya asignado; `None` si el id existe en la colección
    async fn insert_with_id(
        &self,
        collection: &str,
        id: String,
        body: Value,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents.contains_key(&id) {
            tracing::warn!("⚠️ Colisión de ObjectId '{}' en '{}'", id, collection);
            return Ok(None);
        }

        documents.insert(id.clone(), body.clone());
        Ok(Some(Document { id, body }))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<Option<Document>, StoreError> {
        self.insert_with_id(collection, object_id::generate(), body).await
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, body)| Document {
                        id: id.clone(),
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let id = normalize_object_id(id)?;
        let collections = self.collections.read().await;
        let document = collections
            .get(collection)
            .and_then(|documents| documents.get(&id))
            .map(|body| Document {
                id: id.clone(),
                body: body.clone(),
            });
        Ok(document)
    }

    async fn replace(
        &self,
        collection: &str,
        id: &str,
        body: Value,
    ) -> Result<Option<Document>, StoreError> {
        let id = normalize_object_id(id)?;
        let mut collections = self.collections.write().await;
        let Some(stored) = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(&id))
        else {
            return Ok(None);
        };

        *stored = body.clone();
        Ok(Some(Document { id, body }))
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let id = normalize_object_id(id)?;
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .and_then(|documents| documents.remove(&id))
            .map(|body| Document { id, body });
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store_tests;
    use serde_json::json;

    #[tokio::test]
    async fn test_document_store_behaviour() {
        store_tests::check_document_store(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_count_per_collection() {
        let store = MemoryStore::new();
        store.insert("cars", json!({})).await.unwrap().unwrap();

        assert_eq!(store.count("cars").await, 1);
        assert_eq!(store.count("motorcycles").await, 0);
    }

    #[tokio::test]
    async fn test_id_collision_creates_nothing() {
        let store = MemoryStore::new();
        let id = object_id::generate();

        let first = store.insert_with_id("cars", id.clone(), json!({ "n": 1 })).await.unwrap();
        assert!(first.is_some());
        let second = store.insert_with_id("cars", id.clone(), json!({ "n": 2 })).await.unwrap();
        assert!(second.is_none());

        let stored = store.find_by_id("cars", &id).await.unwrap().unwrap();
        assert_eq!(stored.body, json!({ "n": 1 }));
    }
}
