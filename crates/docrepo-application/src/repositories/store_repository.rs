//! Store-backed document repository
//!
//! Bridges typed documents and the JSON objects a `DocumentStoreProvider`
//! works with. The id lives in the reserved `id` field of the stored object.

use async_trait::async_trait;
use docrepo_domain::constants::ID_FIELD;
use docrepo_domain::entities::Document;
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::{DocumentStoreProvider, JsonObject};
use docrepo_domain::repositories::DocumentRepository;
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Repository over the collection `T::COLLECTION` of a document store
pub struct StoreRepository<T: Document> {
    store: Arc<dyn DocumentStoreProvider>,
    _document: PhantomData<fn() -> T>,
}

impl<T: Document> StoreRepository<T> {
    /// Bind a repository to `store`, creating the unique indexes `T` declares
    pub async fn open(store: Arc<dyn DocumentStoreProvider>) -> Result<Self> {
        for field in T::unique_fields() {
            store.ensure_unique_index(T::COLLECTION, field).await?;
        }
        tracing::debug!(
            collection = T::COLLECTION,
            provider = store.provider_name(),
            unique_fields = ?T::unique_fields(),
            "Repository opened"
        );
        Ok(Self {
            store,
            _document: PhantomData,
        })
    }

    /// Collection backing this repository
    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    fn to_object(document: &T) -> Result<JsonObject> {
        match serde_json::to_value(document)? {
            Value::Object(mut object) => {
                object.remove(ID_FIELD);
                Ok(object)
            }
            other => Err(Error::invalid_argument(format!(
                "document for '{}' must serialize to an object, got {other}",
                T::COLLECTION
            ))),
        }
    }

    fn from_object(object: JsonObject) -> Result<T> {
        let id = match object.get(ID_FIELD) {
            Some(Value::String(id)) => DocumentId::from(id.as_str()),
            _ => {
                return Err(Error::store(format!(
                    "stored document in '{}' has no id",
                    T::COLLECTION
                )));
            }
        };
        let mut document: T = serde_json::from_value(Value::Object(object))?;
        document.set_id(id);
        Ok(document)
    }
}

impl<T: Document> Clone for StoreRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Document> DocumentRepository<T> for StoreRepository<T> {
    async fn create(&self, mut document: T) -> Result<T> {
        let object = Self::to_object(&document)?;
        let id = self.store.insert(T::COLLECTION, object).await?;
        tracing::debug!(collection = T::COLLECTION, id = %id, "Document created");
        document.set_id(id);
        Ok(document)
    }

    async fn get_by_id(&self, id: &DocumentId) -> Result<Option<T>> {
        self.store
            .get(T::COLLECTION, id)
            .await?
            .map(Self::from_object)
            .transpose()
    }

    async fn find_by_fields(&self, filter: FieldFilter) -> Result<Vec<T>> {
        let objects = self.store.find(T::COLLECTION, &filter).await?;
        tracing::debug!(
            collection = T::COLLECTION,
            filter = ?filter,
            matches = objects.len(),
            "Documents found"
        );
        objects.into_iter().map(Self::from_object).collect()
    }

    async fn delete_by_id(&self, id: &DocumentId) -> Result<bool> {
        let deleted = self.store.delete(T::COLLECTION, id).await?;
        tracing::debug!(collection = T::COLLECTION, id = %id, deleted, "Document delete");
        Ok(deleted)
    }

    async fn update_by_id(&self, id: &DocumentId, patch: Patch) -> Result<Option<T>> {
        patch.ensure_id_untouched()?;
        let Some(mut merged) = self.store.get(T::COLLECTION, id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Self::from_object(merged).map(Some);
        }

        // A stored document must always read back as `T`
        patch.apply_to(&mut merged);
        Self::from_object(merged).map_err(|e| {
            Error::invalid_argument(format!(
                "patch does not fit a document of '{}': {e}",
                T::COLLECTION
            ))
        })?;

        if !self.store.update(T::COLLECTION, id, &patch).await? {
            return Ok(None);
        }
        tracing::debug!(collection = T::COLLECTION, id = %id, "Document updated");
        self.get_by_id(id).await
    }
}
