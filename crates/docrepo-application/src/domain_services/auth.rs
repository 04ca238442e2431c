//! Admin Authentication Service Interface

use async_trait::async_trait;
use docrepo_domain::entities::Admin;
use docrepo_domain::error::Result;
use docrepo_domain::value_objects::{AccessToken, Claims};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Signup request for a new admin account
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct NewAdmin {
    /// Display name
    #[validate(length(min = 1, message = "fullname must not be empty"))]
    pub fullname: String,
    /// Login email
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    /// Plaintext password, hashed before storage
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl NewAdmin {
    /// Build a signup request
    pub fn new(
        fullname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            fullname: fullname.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAdmin")
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Admin authentication operations
///
/// `Conflict` and `Authentication` errors are final outcomes and are never
/// retried.
#[async_trait]
pub trait AdminAuthServiceInterface: Send + Sync {
    /// Register a new admin, storing only the password hash
    ///
    /// Fails with `Error::Conflict` when the email is already registered and
    /// `Error::InvalidArgument` when the request does not validate.
    async fn sign_up(&self, request: NewAdmin) -> Result<Admin>;

    /// Exchange credentials for a signed access token
    ///
    /// Unknown email and wrong password fail with the same
    /// `Error::Authentication` message.
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken>;

    /// Verify a previously issued token
    fn validate_token(&self, token: &str) -> Result<Claims>;
}
