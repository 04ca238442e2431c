//! Authentication configuration types

use crate::constants::{BCRYPT_DEFAULT_COST, JWT_DEFAULT_EXPIRATION_SECS, JWT_DEFAULT_ISSUER};
use serde::{Deserialize, Serialize};

/// Password hashing algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    #[default]
    Bcrypt,
    Argon2, // Argon2id
}

/// JWT configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// JWT secret key
    ///
    /// **REQUIRED**. Configure via `DOCREPO__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. Must be at least 32 characters.
    pub secret: String,

    /// Token lifetime in seconds
    pub expiration_secs: u64,

    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Empty by default, the loader refuses to start without one
            secret: String::new(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
            issuer: JWT_DEFAULT_ISSUER.to_string(),
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Hashing algorithm for new passwords
    pub algorithm: PasswordAlgorithm,

    /// bcrypt cost factor (4-31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::default(),
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    pub password: PasswordConfig,
}
