//! Admin account entity

use super::document::Document;
use crate::constants::ADMIN_COLLECTION;
use crate::value_objects::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored admin account
///
/// `password` holds the password hash once the account has been created.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Store-assigned id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Display name
    pub fullname: String,
    /// Login email, unique across admins
    pub email: String,
    /// Password hash
    pub password: String,
}

impl Admin {
    /// Create an admin that has not been stored yet
    pub fn new(fullname: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            fullname,
            email,
            password: password_hash,
        }
    }
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Document for Admin {
    const COLLECTION: &'static str = ADMIN_COLLECTION;

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: DocumentId) {
        self.id = Some(id);
    }

    fn unique_fields() -> &'static [&'static str] {
        &["email"]
    }
}

/// Public view of an admin, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminData {
    /// Display name
    pub fullname: String,
    /// Login email
    pub email: String,
}

impl From<Admin> for AdminData {
    fn from(admin: Admin) -> Self {
        Self {
            fullname: admin.fullname,
            email: admin.email,
        }
    }
}

impl From<&Admin> for AdminData {
    fn from(admin: &Admin) -> Self {
        Self {
            fullname: admin.fullname.clone(),
            email: admin.email.clone(),
        }
    }
}

/// Login credentials; `username` carries the admin email
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSignIn {
    /// Admin email
    pub username: String,
    /// Plaintext password
    pub password: String,
}

impl fmt::Debug for AdminSignIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSignIn")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
