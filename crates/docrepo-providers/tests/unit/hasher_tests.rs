//! Tests for password hashers and the token signer through their ports

use docrepo_domain::ports::{PasswordHasher, TokenSigner};
use docrepo_providers::crypto::{Argon2PasswordHasher, BcryptPasswordHasher, JwtTokenSigner};
use std::sync::Arc;

fn hashers() -> Vec<Arc<dyn PasswordHasher>> {
    vec![
        Arc::new(BcryptPasswordHasher::new(4).unwrap()),
        Arc::new(Argon2PasswordHasher::new()),
    ]
}

#[test]
fn test_every_hasher_round_trips() {
    for hasher in hashers() {
        let digest = hasher.hash("s3cret").unwrap();
        assert_ne!(digest, "s3cret", "{}", hasher.algorithm());
        assert!(hasher.verify("s3cret", &digest).unwrap());
        assert!(!hasher.verify("S3cret", &digest).unwrap());
    }
}

#[test]
fn test_bcrypt_digest_carries_cost() {
    let hasher = BcryptPasswordHasher::new(5).unwrap();
    let digest = hasher.hash("pw").unwrap();
    assert!(digest.contains("$05$"));
    assert_eq!(hasher.cost(), 5);
}

#[test]
fn test_default_bcrypt_cost() {
    assert_eq!(BcryptPasswordHasher::default().cost(), 12);
}

#[test]
fn test_signer_as_trait_object() {
    let signer: Arc<dyn TokenSigner> = Arc::new(JwtTokenSigner::new(
        "0123456789abcdef0123456789abcdef",
        "docrepo",
        60,
    ));
    let token = signer.sign("a@b.com").unwrap();
    assert_eq!(signer.verify(&token.access_token).unwrap().sub, "a@b.com");
    assert!(signer.verify("garbage").is_err());
}
