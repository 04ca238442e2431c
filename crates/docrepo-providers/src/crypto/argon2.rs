//! Password hashing service using Argon2

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::PasswordHasher;

/// Argon2id password hasher producing PHC strings
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Create a hasher with the default Argon2id parameters
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(digest)
            .map_err(|e| Error::internal(format!("Invalid password hash format: {e}")))?;

        Ok(self
            .argon2
            .verify_password(plain.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn algorithm(&self) -> &str {
        "argon2id"
    }
}
