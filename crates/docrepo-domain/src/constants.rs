//! Domain constants

/// Reserved field under which every stored document keeps its id
pub const ID_FIELD: &str = "id";

/// Collection holding admin accounts
pub const ADMIN_COLLECTION: &str = "admins";

/// Returned for every failed login, whatever part of the credentials was wrong
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

/// Returned when signing up with an email that is already registered
pub const ADMIN_EXISTS_MESSAGE: &str = "Admin with email supplied already exists";
