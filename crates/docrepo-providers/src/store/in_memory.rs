//! In-memory document store provider implementation
//!
//! Provides an in-memory storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use super::collection::Collection;
use async_trait::async_trait;
use dashmap::DashMap;
use docrepo_domain::error::Result;
use docrepo_domain::ports::{DocumentStoreProvider, JsonObject};
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use std::sync::Arc;

/// In-memory document store provider
///
/// Stores collections in a concurrent hash map. Each write holds the shard
/// lock of its collection, so unique-index checks cannot race with inserts.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<DashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
        }
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|coll| coll.len())
            .unwrap_or(0)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStoreProvider for InMemoryDocumentStore {
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<()> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .add_unique_field(collection, field)
    }

    async fn insert(&self, collection: &str, document: JsonObject) -> Result<DocumentId> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(collection, document)
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<JsonObject>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|coll| coll.get(id).cloned()))
    }

    async fn exists(&self, collection: &str, id: &DocumentId) -> Result<bool> {
        Ok(self
            .collections
            .get(collection)
            .is_some_and(|coll| coll.get(id).is_some()))
    }

    async fn find(&self, collection: &str, filter: &FieldFilter) -> Result<Vec<JsonObject>> {
        // Unknown collections are simply empty
        Ok(self
            .collections
            .get(collection)
            .map(|coll| coll.find(filter))
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: &DocumentId, patch: &Patch) -> Result<bool> {
        match self.collections.get_mut(collection) {
            Some(mut coll) => coll.update(collection, id, patch),
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool> {
        Ok(self
            .collections
            .get_mut(collection)
            .is_some_and(|mut coll| coll.delete(id)))
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
