//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`AdminAuthServiceInterface`] | Admin signup, login and token validation |

/// Admin authentication service interface
pub mod auth;

pub use auth::{AdminAuthServiceInterface, NewAdmin};
