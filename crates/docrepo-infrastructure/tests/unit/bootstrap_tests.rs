//! Tests for the composition root

use docrepo_application::NewAdmin;
use docrepo_domain::entities::{Admin, Document};
use docrepo_domain::repositories::DocumentRepository;
use docrepo_domain::value_objects::{DocumentId, FieldFilter};
use docrepo_infrastructure::AppContext;
use docrepo_infrastructure::config::{
    AppConfig, ConfigBuilder, PasswordAlgorithm, StoreConfig, StoreProviderKind,
};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn config() -> AppConfig {
    let mut config = ConfigBuilder::new().with_jwt_secret(SECRET).build();
    config.auth.password.bcrypt_cost = 4;
    config
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    text: String,
}

impl Document for Note {
    const COLLECTION: &'static str = "notes";

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: DocumentId) {
        self.id = Some(id);
    }
}

#[tokio::test]
async fn test_memory_context_signup_and_login() {
    let context = AppContext::build(config()).await.unwrap();
    assert_eq!(context.store().provider_name(), "in_memory");

    let auth = context.auth_service();
    auth.sign_up(NewAdmin::new("Ada", "a@b.com", "pw1"))
        .await
        .unwrap();
    let token = auth.login("a@b.com", "pw1").await.unwrap();
    assert_eq!(auth.validate_token(&token.access_token).unwrap().sub, "a@b.com");

    let admins: Vec<Admin> = context
        .admin_repository()
        .find_by_fields(FieldFilter::new().eq("email", "a@b.com"))
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
}

#[tokio::test]
async fn test_filesystem_context_persists_admins() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config();
    config.store = StoreConfig {
        provider: StoreProviderKind::Filesystem,
        data_dir: Some(temp_dir.path().to_path_buf()),
    };
    config.auth.password.algorithm = PasswordAlgorithm::Argon2;

    {
        let context = AppContext::build(config.clone()).await.unwrap();
        assert_eq!(context.store().provider_name(), "filesystem");
        context
            .auth_service()
            .sign_up(NewAdmin::new("Ada", "a@b.com", "pw1"))
            .await
            .unwrap();
    }

    let reopened = AppContext::build(config).await.unwrap();
    assert!(
        reopened
            .auth_service()
            .login("a@b.com", "pw1")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_extra_repository_on_shared_store() {
    let context = AppContext::build(config()).await.unwrap();
    let notes = context.repository::<Note>().await.unwrap();

    let created = notes
        .create(Note {
            id: None,
            text: "hello".into(),
        })
        .await
        .unwrap();
    let found = notes.get_by_id(created.id().unwrap()).await.unwrap();
    assert_eq!(found, Some(created));
}
