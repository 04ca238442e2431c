//! Document Store Provider Port
//!
//! Contract every storage driver implements. Documents cross this port as
//! JSON objects; the driver owns id assignment and unique-index enforcement.

use crate::error::Result;
use crate::value_objects::{DocumentId, FieldFilter, Patch};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A document as stored: a JSON object including its `id` field
pub type JsonObject = Map<String, Value>;

/// Storage driver for named collections of JSON documents
///
/// # Example
///
/// ```ignore
/// store.ensure_unique_index("admins", "email").await?;
/// let id = store.insert("admins", document).await?;
/// let stored = store.get("admins", &id).await?;
/// ```
#[async_trait]
pub trait DocumentStoreProvider: Send + Sync {
    /// Require `field` to be unique across `collection`
    ///
    /// Idempotent. Subsequent inserts and updates that would duplicate a
    /// value fail with [`crate::error::Error::Conflict`].
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<()>;

    /// Insert a document, assigning it a fresh id
    ///
    /// Any `id` field already present on `document` is replaced.
    async fn insert(&self, collection: &str, document: JsonObject) -> Result<DocumentId>;

    /// Fetch a document by id
    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<JsonObject>>;

    /// Check whether a document exists
    async fn exists(&self, collection: &str, id: &DocumentId) -> Result<bool>;

    /// Return every document matching `filter`, in store-defined order
    async fn find(&self, collection: &str, filter: &FieldFilter) -> Result<Vec<JsonObject>>;

    /// Merge `patch` into the document; `false` when it does not exist
    async fn update(&self, collection: &str, id: &DocumentId, patch: &Patch) -> Result<bool>;

    /// Remove a document; `false` when it does not exist
    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool>;

    /// Short name of the driver, used in logs
    fn provider_name(&self) -> &str;
}
