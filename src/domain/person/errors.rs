use thiserror::Error;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    #[error("username must be at least {min} characters")]
    InvalidUsername { min: usize },

    #[error("password must be at least {min} characters")]
    InvalidPassword { min: usize },

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("new password must be different from current password")]
    SamePassword,

    #[error("person already has this role")]
    SameRole,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl From<PersonError> for DomainError {
    fn from(e: PersonError) -> Self {
        match e {
            PersonError::InvalidCredentials => DomainError::Unauthorized(e.to_string()),
            PersonError::Hashing(msg) => DomainError::Internal(msg),
            other => DomainError::Validation(other.to_string()),
        }
    }
}
