//! Token value objects

use serde::{Deserialize, Serialize};

/// Signed token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Encoded JWT
    pub access_token: String,
}

impl AccessToken {
    /// Wrap an encoded token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin email)
    pub sub: String,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Create claims for `subject` issued at `now`
    pub fn new(subject: String, issuer: String, now: u64, expiration_secs: u64) -> Self {
        Self {
            sub: subject,
            iat: now,
            exp: now.saturating_add(expiration_secs),
            iss: issuer,
        }
    }

    /// Check whether the claims have expired at `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.exp < now
    }
}
