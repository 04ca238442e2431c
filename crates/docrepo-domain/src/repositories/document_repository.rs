//! Document Repository Interface
//!
//! Typed CRUD contract over one collection, parameterized by document type.

use crate::entities::Document;
use crate::error::Result;
use crate::value_objects::{DocumentId, FieldFilter, Patch};
use async_trait::async_trait;

/// Repository: typed CRUD over the collection of `T`
///
/// Absence is an expected outcome, reported through `Option`/`bool` rather
/// than an error.
///
/// # Example
///
/// ```ignore
/// let stored = repo.create(student).await?;
/// let id = stored.id().cloned().unwrap();
///
/// let found = repo.get_by_id(&id).await?;
/// let twenty = repo.find_by_fields(FieldFilter::new().eq("age", 20)).await?;
/// let updated = repo.update_by_id(&id, Patch::new().set("age", 21)?).await?;
/// let deleted = repo.delete_by_id(&id).await?;
/// ```
#[async_trait]
pub trait DocumentRepository<T: Document>: Send + Sync {
    /// Persist a new document and return it with its assigned id
    async fn create(&self, document: T) -> Result<T>;

    /// Fetch a document by id
    async fn get_by_id(&self, id: &DocumentId) -> Result<Option<T>>;

    /// Return every document whose fields equal all pairs in `filter`
    async fn find_by_fields(&self, filter: FieldFilter) -> Result<Vec<T>>;

    /// Remove a document; `false` when nothing was stored at `id`
    async fn delete_by_id(&self, id: &DocumentId) -> Result<bool>;

    /// Apply a merge-patch and return the document as stored afterwards
    ///
    /// `None` when nothing is stored at `id`.
    async fn update_by_id(&self, id: &DocumentId, patch: Patch) -> Result<Option<T>>;
}
