//! # docrepo - Provider Implementations
//!
//! Each provider implements a port (trait) defined in `docrepo-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Document Store | `DocumentStoreProvider` | InMemory, Filesystem |
//! | Password Hashing | `PasswordHasher` | Bcrypt, Argon2 |
//! | Token Signing | `TokenSigner` | Jwt |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! docrepo-providers = { version = "0.1", default-features = false, features = ["store-memory", "hash-bcrypt"] }
//! ```

pub use docrepo_domain::error::{Error, Result};
pub use docrepo_domain::ports::{DocumentStoreProvider, PasswordHasher, TokenSigner};

/// Provider constants
pub mod constants;

/// Credential provider implementations
pub mod crypto;

/// Document store provider implementations
pub mod store;
