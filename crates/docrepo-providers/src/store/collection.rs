//! Collection state shared by the local store providers
//!
//! Holds the documents of one collection together with its unique indexes.
//! Callers serialize access (shard lock or `RwLock`), which makes the
//! uniqueness check and the write a single step.

use docrepo_domain::constants::ID_FIELD;
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::JsonObject;
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Documents and unique indexes of one collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    unique_fields: BTreeSet<String>,
    #[serde(default)]
    documents: BTreeMap<DocumentId, JsonObject>,
}

impl Collection {
    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Register a unique index, failing if current documents already clash
    pub fn add_unique_field(&mut self, collection: &str, field: &str) -> Result<()> {
        if self.unique_fields.contains(field) {
            return Ok(());
        }
        let mut seen = BTreeSet::new();
        for value in self.documents.values().filter_map(|doc| indexed_value(doc, field)) {
            if !seen.insert(value.to_string()) {
                return Err(Error::conflict(format!(
                    "cannot index '{field}' on '{collection}': duplicate value {value}"
                )));
            }
        }
        self.unique_fields.insert(field.to_string());
        Ok(())
    }

    /// Store a new document under a freshly generated id
    pub fn insert(&mut self, collection: &str, mut document: JsonObject) -> Result<DocumentId> {
        let id = DocumentId::generate();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        self.check_unique(collection, &document, None)?;
        self.documents.insert(id.clone(), document);
        Ok(id)
    }

    /// Borrow a document by id
    pub fn get(&self, id: &DocumentId) -> Option<&JsonObject> {
        self.documents.get(id)
    }

    /// Clone every document matching `filter`
    pub fn find(&self, filter: &FieldFilter) -> Vec<JsonObject> {
        self.documents
            .values()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect()
    }

    /// Merge `patch` into a stored document
    pub fn update(&mut self, collection: &str, id: &DocumentId, patch: &Patch) -> Result<bool> {
        patch.ensure_id_untouched()?;
        let Some(existing) = self.documents.get(id) else {
            return Ok(false);
        };
        let mut merged = existing.clone();
        patch.apply_to(&mut merged);
        self.check_unique(collection, &merged, Some(id))?;
        self.documents.insert(id.clone(), merged);
        Ok(true)
    }

    /// Remove a document
    pub fn delete(&mut self, id: &DocumentId) -> bool {
        self.documents.remove(id).is_some()
    }

    fn check_unique(
        &self,
        collection: &str,
        document: &JsonObject,
        own_id: Option<&DocumentId>,
    ) -> Result<()> {
        for field in &self.unique_fields {
            let Some(value) = indexed_value(document, field) else {
                continue;
            };
            let taken = self
                .documents
                .iter()
                .filter(|(id, _)| Some(*id) != own_id)
                .any(|(_, other)| other.get(field) == Some(value));
            if taken {
                return Err(Error::conflict(format!(
                    "duplicate value for unique field '{field}' in '{collection}'"
                )));
            }
        }
        Ok(())
    }
}

/// Null values are not indexed
fn indexed_value<'a>(document: &'a JsonObject, field: &str) -> Option<&'a Value> {
    document.get(field).filter(|value| !value.is_null())
}
