//! Password value object and hashing port

use super::errors::PersonError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashing backend. Implemented in `infrastructure::crypto::password`.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, PersonError>;
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, PersonError>;
}

/// A hashed password. The plain text never leaves the constructor.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl Password {
    pub fn new(plain: &str, hasher: &dyn PasswordHasher) -> Result<Self, PersonError> {
        if plain.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PersonError::InvalidPassword {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(Self {
            hash: hasher.hash(plain)?,
        })
    }

    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn verify(&self, plain: &str, hasher: &dyn PasswordHasher) -> Result<bool, PersonError> {
        hasher.verify(plain, &self.hash)
    }

    pub fn is_valid(&self) -> bool {
        !self.hash.is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}
