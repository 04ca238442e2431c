//! Tests for the merge-patch policy

use docrepo_domain::value_objects::Patch;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize, Default)]
struct StudentUpdate {
    name: Option<String>,
    age: Option<u32>,
    email: String,
}

#[test]
fn test_struct_with_unset_fields_only_patches_set_ones() {
    let update = StudentUpdate {
        age: Some(21),
        ..Default::default()
    };
    let patch = Patch::from_serializable(&update).unwrap();

    assert!(patch.contains("age"));
    assert!(!patch.contains("name"));
    assert!(!patch.contains("email"));
}

#[test]
fn test_apply_preserves_untouched_fields() {
    let patch = Patch::new().set("b", 3).unwrap();
    let mut doc = json!({"a": 1, "b": 2, "c": "x"})
        .as_object()
        .cloned()
        .unwrap();
    patch.apply_to(&mut doc);
    assert_eq!(Value::Object(doc), json!({"a": 1, "b": 3, "c": "x"}));
}

#[test]
fn test_set_if_some() {
    let patch = Patch::new()
        .set_if_some("a", None::<i32>)
        .unwrap()
        .set_if_some("b", Some("v"))
        .unwrap();
    assert!(!patch.contains("a"));
    assert!(patch.contains("b"));
}

#[test]
fn test_empty_collections_are_skipped() {
    let patch = Patch::from_json(json!({"tags": [], "meta": {}, "n": 1})).unwrap();
    assert_eq!(patch.iter().count(), 1);
}
