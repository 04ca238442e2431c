//! Tests for the store-backed repository

use docrepo_application::StoreRepository;
use docrepo_domain::entities::Document;
use docrepo_domain::error::Error;
use docrepo_domain::repositories::DocumentRepository;
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use docrepo_providers::store::InMemoryDocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    name: String,
    email: String,
    year: u32,
    #[serde(default)]
    gpa: Option<f64>,
}

impl Student {
    fn new(name: &str, email: &str, year: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            year,
            gpa: None,
        }
    }
}

impl Document for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: DocumentId) {
        self.id = Some(id);
    }

    fn unique_fields() -> &'static [&'static str] {
        &["email"]
    }
}

async fn repository() -> StoreRepository<Student> {
    StoreRepository::open(Arc::new(InMemoryDocumentStore::new()))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_then_get() {
    let repo = repository().await;
    let created = repo
        .create(Student::new("Ada", "ada@uni.edu", 2))
        .await
        .unwrap();
    let id = created.id().cloned().unwrap();

    let fetched = repo.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Ada");
    assert_eq!(fetched.year, 2);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let repo = repository().await;
    let a = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let b = repo.create(Student::new("B", "b@uni.edu", 1)).await.unwrap();
    assert_ne!(a.id(), b.id());
}

#[tokio::test]
async fn test_create_ignores_caller_supplied_id() {
    let repo = repository().await;
    let mut student = Student::new("A", "a@uni.edu", 1);
    student.id = Some(DocumentId::from("chosen"));

    let created = repo.create(student).await.unwrap();
    assert_ne!(created.id().unwrap().as_str(), "chosen");
    assert!(
        repo.get_by_id(&DocumentId::from("chosen"))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_get_missing_is_none() {
    let repo = repository().await;
    assert!(repo.get_by_id(&DocumentId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_fields() {
    let repo = repository().await;
    repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    repo.create(Student::new("B", "b@uni.edu", 2)).await.unwrap();
    repo.create(Student::new("C", "c@uni.edu", 2)).await.unwrap();

    let second_year = repo
        .find_by_fields(FieldFilter::new().eq("year", 2))
        .await
        .unwrap();
    assert_eq!(second_year.len(), 2);
    assert!(second_year.iter().all(|s| s.year == 2));

    let none = repo
        .find_by_fields(FieldFilter::new().eq("year", 2).eq("name", "A"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_is_false() {
    let repo = repository().await;
    assert!(!repo.delete_by_id(&DocumentId::generate()).await.unwrap());
}

#[tokio::test]
async fn test_delete_existing() {
    let repo = repository().await;
    let created = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let id = created.id().cloned().unwrap();

    assert!(repo.delete_by_id(&id).await.unwrap());
    assert!(repo.get_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_merge_policy() {
    let repo = repository().await;
    let created = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let id = created.id().cloned().unwrap();

    let patch = Patch::from_json(json!({"name": null, "year": 3, "email": ""})).unwrap();
    let updated = repo.update_by_id(&id, patch).await.unwrap().unwrap();

    assert_eq!(updated.name, "A");
    assert_eq!(updated.email, "a@uni.edu");
    assert_eq!(updated.year, 3);
    assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap(), updated);
}

#[tokio::test]
async fn test_update_adds_new_field() {
    let repo = repository().await;
    let created = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let id = created.id().cloned().unwrap();

    let patch = Patch::new().set("gpa", 3.5).unwrap();
    let updated = repo.update_by_id(&id, patch).await.unwrap().unwrap();
    assert_eq!(updated.gpa, Some(3.5));
}

#[tokio::test]
async fn test_update_missing_is_none() {
    let repo = repository().await;
    let patch = Patch::new().set("year", 3).unwrap();
    assert!(
        repo.update_by_id(&DocumentId::generate(), patch)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_empty_patch_returns_current_document() {
    let repo = repository().await;
    let created = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let id = created.id().cloned().unwrap();

    let same = repo.update_by_id(&id, Patch::new()).await.unwrap().unwrap();
    assert_eq!(same, created);
}

#[tokio::test]
async fn test_update_with_mistyped_field_is_rejected() {
    let repo = repository().await;
    let created = repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    repo.create(Student::new("B", "b@uni.edu", 2)).await.unwrap();
    let id = created.id().cloned().unwrap();

    let patch = Patch::new().set("year", "three").unwrap();
    let err = repo.update_by_id(&id, patch).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap(), created);
    let all = repo.find_by_fields(FieldFilter::new()).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_unique_field_conflict() {
    let repo = repository().await;
    repo.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();

    let err = repo
        .create(Student::new("Other", "a@uni.edu", 4))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
}

#[tokio::test]
async fn test_repositories_share_a_store() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let writer: StoreRepository<Student> = StoreRepository::open(store.clone()).await.unwrap();
    let reader: StoreRepository<Student> = StoreRepository::open(store.clone()).await.unwrap();

    let created = writer.create(Student::new("A", "a@uni.edu", 1)).await.unwrap();
    let fetched = reader.get_by_id(created.id().unwrap()).await.unwrap();
    assert_eq!(fetched, Some(created));
    assert_eq!(store.count("students"), 1);
    assert_eq!(reader.collection(), "students");
}
