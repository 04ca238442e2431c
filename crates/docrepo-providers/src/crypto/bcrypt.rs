//! Password hashing with bcrypt

use crate::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use docrepo_domain::error::{Error, Result};
use docrepo_domain::ports::PasswordHasher;

/// bcrypt password hasher with a configurable cost factor
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given cost (4..=31)
    pub fn new(cost: u32) -> Result<Self> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
            return Err(Error::invalid_argument(format!(
                "bcrypt cost must be between {} and {}, got {cost}",
                BCRYPT_MIN_COST,
                BCRYPT_MAX_COST
            )));
        }
        Ok(Self { cost })
    }

    /// Configured cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool> {
        bcrypt::verify(plain, digest)
            .map_err(|e| Error::internal(format!("Password verification failed: {e}")))
    }

    fn algorithm(&self) -> &str {
        "bcrypt"
    }
}
