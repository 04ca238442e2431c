//! Document contract
//!
//! Every entity persisted through a repository implements [`Document`]. The
//! store keeps documents as JSON objects and owns the `id` field.

use crate::value_objects::DocumentId;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity stored in a named collection under a store-assigned id
///
/// # Example
///
/// ```
/// use docrepo_domain::entities::Document;
/// use docrepo_domain::value_objects::DocumentId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Student {
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     id: Option<DocumentId>,
///     name: String,
///     age: u32,
/// }
///
/// impl Document for Student {
///     const COLLECTION: &'static str = "students";
///
///     fn id(&self) -> Option<&DocumentId> {
///         self.id.as_ref()
///     }
///
///     fn set_id(&mut self, id: DocumentId) {
///         self.id = Some(id);
///     }
/// }
/// ```
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection holding documents of this type
    const COLLECTION: &'static str;

    /// The store-assigned id, `None` until the document has been created
    fn id(&self) -> Option<&DocumentId>;

    /// Record the id assigned by the store
    fn set_id(&mut self, id: DocumentId);

    /// Fields whose values must be unique across the collection
    fn unique_fields() -> &'static [&'static str] {
        &[]
    }
}
