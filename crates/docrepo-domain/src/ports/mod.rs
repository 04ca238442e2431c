//! Ports
//!
//! Interfaces the domain expects from the outside world.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DocumentStoreProvider`] | Storage driver for JSON document collections |
//! | [`PasswordHasher`] | Salted one-way password hashing |
//! | [`TokenSigner`] | Signed token issuance and verification |

pub mod providers;

pub use providers::{DocumentStoreProvider, JsonObject, PasswordHasher, TokenSigner};
