//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::warn;

use crate::domain::person::{PasswordHasher, PersonError};

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, PersonError> {
        hash(plain, self.cost).map_err(|e| PersonError::Hashing(e.to_string()))
    }

    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, PersonError> {
        match verify(plain, hashed) {
            Ok(matches) => Ok(matches),
            // A malformed stored hash can never match
            Err(e) => {
                warn!("Stored password hash is unusable: {}", e);
                Ok(false)
            }
        }
    }
}
