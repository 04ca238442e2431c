//! Filesystem document store provider implementation
//!
//! Keeps every collection in memory and mirrors it to
//! `<data_dir>/<collection>.json` after each mutation. Files are written
//! through a temporary file and renamed into place, with 0600 permissions
//! on Unix.

use super::collection::Collection;
use crate::constants::COLLECTION_TMP_EXTENSION;
use async_trait::async_trait;
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::{DocumentStoreProvider, JsonObject};
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// File extension of collection files
const COLLECTION_FILE_EXTENSION: &str = "json";

/// Persistent JSON-file document store
pub struct FilesystemDocumentStore {
    data_dir: PathBuf,
    collections: RwLock<HashMap<String, Collection>>,
}

impl FilesystemDocumentStore {
    /// Open a store rooted at `data_dir`, loading any existing collections
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            Error::store_with_source(
                format!("Failed to create data directory {}", data_dir.display()),
                e,
            )
        })?;

        let collections = load_collections(&data_dir).await?;
        tracing::info!(
            data_dir = %data_dir.display(),
            collections = collections.len(),
            "Filesystem document store opened"
        );

        Ok(Self {
            data_dir,
            collections: RwLock::new(collections),
        })
    }

    /// Root directory of the store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf> {
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::invalid_argument(format!(
                "invalid collection name '{collection}'"
            )));
        }
        Ok(self
            .data_dir
            .join(format!("{collection}.{COLLECTION_FILE_EXTENSION}")))
    }

    async fn persist(&self, collection: &str, state: &Collection) -> Result<()> {
        let path = self.collection_path(collection)?;
        let tmp_path = path.with_extension(COLLECTION_TMP_EXTENSION);
        let content = serde_json::to_string_pretty(state)?;

        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| Error::store_with_source(format!("Failed to write {collection}"), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&tmp_path, perms)
                .await
                .map_err(|e| {
                    Error::store_with_source("Failed to set collection file permissions", e)
                })?;
        }

        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| Error::store_with_source(format!("Failed to replace {collection}"), e))
    }

    /// Apply `op` to a copy of the collection and keep it only once persisted
    async fn mutate<T, F>(&self, collection: &str, op: F) -> Result<T>
    where
        F: FnOnce(&mut Collection) -> Result<T> + Send,
        T: Send,
    {
        self.collection_path(collection)?;
        let mut collections = self.collections.write().await;
        let mut state = collections.get(collection).cloned().unwrap_or_default();
        let out = op(&mut state)?;
        self.persist(collection, &state).await?;
        collections.insert(collection.to_string(), state);
        Ok(out)
    }
}

async fn load_collections(data_dir: &Path) -> Result<HashMap<String, Collection>> {
    let mut collections = HashMap::new();
    let mut entries = tokio::fs::read_dir(data_dir)
        .await
        .map_err(|e| Error::store_with_source("Failed to list data directory", e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::store_with_source("Failed to list data directory", e))?
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(COLLECTION_FILE_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::store_with_source(format!("Failed to read {}", path.display()), e)
        })?;
        let state: Collection = serde_json::from_str(&content).map_err(|e| {
            Error::store_with_source(format!("Failed to parse {}", path.display()), e)
        })?;
        collections.insert(name.to_string(), state);
    }

    Ok(collections)
}

#[async_trait]
impl DocumentStoreProvider for FilesystemDocumentStore {
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<()> {
        self.mutate(collection, |state| state.add_unique_field(collection, field))
            .await
    }

    async fn insert(&self, collection: &str, document: JsonObject) -> Result<DocumentId> {
        self.mutate(collection, |state| state.insert(collection, document))
            .await
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> Result<Option<JsonObject>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|state| state.get(id).cloned()))
    }

    async fn exists(&self, collection: &str, id: &DocumentId) -> Result<bool> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .is_some_and(|state| state.get(id).is_some()))
    }

    async fn find(&self, collection: &str, filter: &FieldFilter) -> Result<Vec<JsonObject>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|state| state.find(filter))
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: &DocumentId, patch: &Patch) -> Result<bool> {
        if !self.exists(collection, id).await? {
            return Ok(false);
        }
        self.mutate(collection, |state| state.update(collection, id, patch))
            .await
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<bool> {
        if !self.exists(collection, id).await? {
            return Ok(false);
        }
        self.mutate(collection, |state| Ok(state.delete(id))).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
