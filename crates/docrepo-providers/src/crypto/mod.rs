//! Credential Provider Implementations
//!
//! | Provider | Port | Description |
//! |----------|------|-------------|
//! | BcryptPasswordHasher | `PasswordHasher` | bcrypt with configurable cost |
//! | Argon2PasswordHasher | `PasswordHasher` | Argon2id, PHC string output |
//! | JwtTokenSigner | `TokenSigner` | HS256 JWT with iat/exp/iss claims |

#[cfg(feature = "hash-argon2")]
pub mod argon2;
#[cfg(feature = "hash-bcrypt")]
pub mod bcrypt;
pub mod jwt;

#[cfg(feature = "hash-argon2")]
pub use self::argon2::Argon2PasswordHasher;
#[cfg(feature = "hash-bcrypt")]
pub use self::bcrypt::BcryptPasswordHasher;
pub use jwt::JwtTokenSigner;
