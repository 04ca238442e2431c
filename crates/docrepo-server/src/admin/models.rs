//! Request and response bodies of the admin API

use docrepo_application::NewAdmin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /admin`
#[derive(Clone, Deserialize)]
pub struct SignupRequest {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Display name
    pub fullname: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("fullname", &self.fullname)
            .finish()
    }
}

impl From<SignupRequest> for NewAdmin {
    fn from(request: SignupRequest) -> Self {
        NewAdmin::new(request.fullname, request.email, request.password)
    }
}

/// Error body shared by every failing response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Build an error body
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
