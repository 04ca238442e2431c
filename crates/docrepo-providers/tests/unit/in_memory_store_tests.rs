//! Tests for the in-memory document store

use docrepo_domain::Error;
use docrepo_domain::ports::{DocumentStoreProvider, JsonObject};
use docrepo_domain::value_objects::{DocumentId, FieldFilter, Patch};
use docrepo_providers::store::InMemoryDocumentStore;
use serde_json::{Value, json};

fn obj(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_insert_then_get() {
    let store = InMemoryDocumentStore::new();
    let id = store
        .insert("students", obj(json!({"name": "Ada", "age": 20})))
        .await
        .unwrap();

    let doc = store.get("students", &id).await.unwrap().unwrap();
    assert_eq!(doc["name"], json!("Ada"));
    assert_eq!(doc["id"], json!(id.as_str()));
    assert_eq!(store.count("students"), 1);
}

#[tokio::test]
async fn test_unknown_collection_is_empty() {
    let store = InMemoryDocumentStore::new();
    let id = DocumentId::generate();

    assert!(store.get("nothing", &id).await.unwrap().is_none());
    assert!(!store.exists("nothing", &id).await.unwrap());
    assert!(store.find("nothing", &FieldFilter::new()).await.unwrap().is_empty());
    assert!(!store.delete("nothing", &id).await.unwrap());
    assert!(!store.update("nothing", &id, &Patch::new()).await.unwrap());
}

#[tokio::test]
async fn test_find_by_fields() {
    let store = InMemoryDocumentStore::new();
    store
        .insert("students", obj(json!({"name": "Ada", "year": 2})))
        .await
        .unwrap();
    store
        .insert("students", obj(json!({"name": "Bob", "year": 2})))
        .await
        .unwrap();
    store
        .insert("students", obj(json!({"name": "Cy", "year": 3})))
        .await
        .unwrap();

    let second_year = store
        .find("students", &FieldFilter::new().eq("year", 2))
        .await
        .unwrap();
    assert_eq!(second_year.len(), 2);

    let all = store.find("students", &FieldFilter::new()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_delete_twice() {
    let store = InMemoryDocumentStore::new();
    let id = store.insert("students", obj(json!({"a": 1}))).await.unwrap();

    assert!(store.delete("students", &id).await.unwrap());
    assert!(!store.delete("students", &id).await.unwrap());
    assert!(store.get("students", &id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_merges_fields() {
    let store = InMemoryDocumentStore::new();
    let id = store
        .insert("students", obj(json!({"a": 1, "b": 2})))
        .await
        .unwrap();

    let patch = Patch::from_json(json!({"a": null, "b": 3})).unwrap();
    assert!(store.update("students", &id, &patch).await.unwrap());

    let doc = store.get("students", &id).await.unwrap().unwrap();
    assert_eq!(doc["a"], json!(1));
    assert_eq!(doc["b"], json!(3));
}

#[tokio::test]
async fn test_update_cannot_change_id() {
    let store = InMemoryDocumentStore::new();
    let id = store.insert("students", obj(json!({"a": 1}))).await.unwrap();

    let patch = Patch::new().set("id", "other").unwrap();
    let err = store.update("students", &id, &patch).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_unique_index_conflict() {
    let store = InMemoryDocumentStore::new();
    store.ensure_unique_index("admins", "email").await.unwrap();
    store
        .insert("admins", obj(json!({"email": "a@b.com"})))
        .await
        .unwrap();

    let err = store
        .insert("admins", obj(json!({"email": "a@b.com"})))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
    assert_eq!(store.count("admins"), 1);
}

#[tokio::test]
async fn test_update_into_taken_unique_value() {
    let store = InMemoryDocumentStore::new();
    store.ensure_unique_index("admins", "email").await.unwrap();
    store
        .insert("admins", obj(json!({"email": "a@b.com"})))
        .await
        .unwrap();
    let id = store
        .insert("admins", obj(json!({"email": "c@d.com"})))
        .await
        .unwrap();

    let patch = Patch::new().set("email", "a@b.com").unwrap();
    let err = store.update("admins", &id, &patch).await.unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));

    let doc = store.get("admins", &id).await.unwrap().unwrap();
    assert_eq!(doc["email"], json!("c@d.com"));
}

#[tokio::test]
async fn test_concurrent_inserts_respect_unique_index() {
    let store = InMemoryDocumentStore::new();
    store.ensure_unique_index("admins", "email").await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert("admins", obj(json!({"email": "same@b.com"})))
                    .await
            })
        })
        .collect();

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            ok += 1;
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(store.count("admins"), 1);
}

#[test]
fn test_provider_name() {
    assert_eq!(InMemoryDocumentStore::new().provider_name(), "in_memory");
}
