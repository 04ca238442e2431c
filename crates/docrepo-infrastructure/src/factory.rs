//! Provider factories
//!
//! Turn configuration sections into provider trait objects.

use crate::config::{JwtConfig, PasswordAlgorithm, PasswordConfig, StoreConfig, StoreProviderKind};
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::{DocumentStoreProvider, PasswordHasher, TokenSigner};
use docrepo_providers::crypto::{Argon2PasswordHasher, BcryptPasswordHasher, JwtTokenSigner};
use docrepo_providers::store::{FilesystemDocumentStore, InMemoryDocumentStore};
use std::sync::Arc;

/// Create the configured document store
pub async fn create_document_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStoreProvider>> {
    let store: Arc<dyn DocumentStoreProvider> = match config.provider {
        StoreProviderKind::Memory => Arc::new(InMemoryDocumentStore::new()),
        StoreProviderKind::Filesystem => {
            let data_dir = config.data_dir.as_ref().ok_or_else(|| {
                Error::configuration("store.data_dir is required for the filesystem store")
            })?;
            Arc::new(FilesystemDocumentStore::open(data_dir).await?)
        }
    };
    Ok(store)
}

/// Create the configured password hasher
pub fn create_password_hasher(config: &PasswordConfig) -> Result<Arc<dyn PasswordHasher>> {
    let hasher: Arc<dyn PasswordHasher> = match config.algorithm {
        PasswordAlgorithm::Bcrypt => Arc::new(
            BcryptPasswordHasher::new(config.bcrypt_cost)
                .map_err(|e| Error::configuration(e.to_string()))?,
        ),
        PasswordAlgorithm::Argon2 => Arc::new(Argon2PasswordHasher::new()),
    };
    Ok(hasher)
}

/// Create the token signer
pub fn create_token_signer(config: &JwtConfig) -> Arc<dyn TokenSigner> {
    Arc::new(JwtTokenSigner::new(
        &config.secret,
        config.issuer.clone(),
        config.expiration_secs,
    ))
}
