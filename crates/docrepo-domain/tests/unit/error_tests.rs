//! Tests for the domain error type

use docrepo_domain::error::Error;

#[test]
fn test_store_error_display() {
    let err = Error::store("disk unavailable");
    assert_eq!(err.to_string(), "Store error: disk unavailable");
}

#[test]
fn test_store_error_keeps_source() {
    let io = std::io::Error::other("boom");
    let err = Error::store_with_source("write failed", io);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_client_errors() {
    assert!(Error::conflict("dup").is_client_error());
    assert!(Error::authentication("nope").is_client_error());
    assert!(Error::invalid_argument("bad").is_client_error());
    assert!(!Error::store("io").is_client_error());
    assert!(!Error::internal("hash").is_client_error());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Serialization { .. }));
}
