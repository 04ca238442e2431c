//! Composition root
//!
//! ```text
//! AppConfig → factories → store / hasher / signer → repositories → services
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = AppContext::build(config).await?;
//! let token = context.auth_service().login("a@b.com", "pw").await?;
//!
//! // Further typed repositories share the same store
//! let students = context.repository::<Student>().await?;
//! ```

use crate::config::AppConfig;
use crate::factory::{create_document_store, create_password_hasher, create_token_signer};
use docrepo_application::{AdminAuthService, AdminAuthServiceInterface, StoreRepository};
use docrepo_domain::entities::{Admin, Document};
use docrepo_domain::error::Result;
use docrepo_domain::ports::DocumentStoreProvider;
use docrepo_domain::repositories::DocumentRepository;
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired providers and services
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    store: Arc<dyn DocumentStoreProvider>,
    admins: Arc<dyn DocumentRepository<Admin>>,
    auth_service: Arc<dyn AdminAuthServiceInterface>,
}

impl AppContext {
    /// Build every component described by `config`
    pub async fn build(config: AppConfig) -> Result<Self> {
        info!("Initializing application context");
        let config = Arc::new(config);

        let store = create_document_store(&config.store).await?;
        let hasher = create_password_hasher(&config.auth.password)?;
        let signer = create_token_signer(&config.auth.jwt);

        info!(
            "Resolved providers: store={}, password={}",
            store.provider_name(),
            hasher.algorithm()
        );

        let admins: Arc<dyn DocumentRepository<Admin>> =
            Arc::new(StoreRepository::<Admin>::open(Arc::clone(&store)).await?);
        let auth_service: Arc<dyn AdminAuthServiceInterface> = Arc::new(AdminAuthService::new(
            Arc::clone(&admins),
            hasher,
            signer,
        ));

        Ok(Self {
            config,
            store,
            admins,
            auth_service,
        })
    }

    /// Document store shared by all repositories
    pub fn store(&self) -> Arc<dyn DocumentStoreProvider> {
        Arc::clone(&self.store)
    }

    /// Admin repository
    pub fn admin_repository(&self) -> Arc<dyn DocumentRepository<Admin>> {
        Arc::clone(&self.admins)
    }

    /// Admin authentication service
    pub fn auth_service(&self) -> Arc<dyn AdminAuthServiceInterface> {
        Arc::clone(&self.auth_service)
    }

    /// Open a repository for another document type on the shared store
    pub async fn repository<T: Document>(&self) -> Result<StoreRepository<T>> {
        StoreRepository::open(self.store()).await
    }
}
