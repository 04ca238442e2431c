//! Tests for the Document contract

use docrepo_domain::entities::{Admin, Document};
use docrepo_domain::value_objects::DocumentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    body: String,
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

#[test]
fn test_default_unique_fields_empty() {
    assert!(Note::unique_fields().is_empty());
}

#[test]
fn test_admin_email_is_unique() {
    assert_eq!(Admin::COLLECTION, "admins");
    assert_eq!(Admin::unique_fields(), &["email"]);
}

#[test]
fn test_set_id() {
    let mut note = Note {
        id: None,
        body: "hello".to_string(),
    };
    assert!(note.id().is_none());
    note.set_id(DocumentId::from("n1"));
    assert_eq!(note.id().map(DocumentId::as_str), Some("n1"));
}

#[test]
fn test_stored_admin_round_trips_with_id() {
    let json = serde_json::json!({
        "id": "abc",
        "fullname": "Name",
        "email": "a@b.com",
        "password": "hash"
    });
    let admin: Admin = serde_json::from_value(json).unwrap();
    assert_eq!(admin.id(), Some(&DocumentId::from("abc")));
}
