//! Credential Provider Ports
//!
//! Password hashing and token signing primitives used by the admin flow.

use crate::error::Result;
use crate::value_objects::{AccessToken, Claims};

/// One-way salted password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing digest
    fn hash(&self, plain: &str) -> Result<String>;

    /// Verify a plaintext password against a digest in constant time
    ///
    /// Returns `Err` only when the digest itself cannot be read.
    fn verify(&self, plain: &str, digest: &str) -> Result<bool>;

    /// Name of the hashing algorithm
    fn algorithm(&self) -> &str;
}

/// Stateless signed token issuance
pub trait TokenSigner: Send + Sync {
    /// Issue a signed token bound to `subject`
    fn sign(&self, subject: &str) -> Result<AccessToken>;

    /// Verify signature, expiry and issuer, returning the claims
    fn verify(&self, token: &str) -> Result<Claims>;
}
