//! Provider ports implemented by `docrepo-providers`

pub mod crypto;
pub mod store;

pub use crypto::{PasswordHasher, TokenSigner};
pub use store::{DocumentStoreProvider, JsonObject};
