use thiserror::Error;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
    #[error("farm name cannot be empty")]
    InvalidName,

    #[error("farm size must be greater than 0 and at most 1,000,000 hectares")]
    InvalidSize,
}

impl From<FarmError> for DomainError {
    fn from(e: FarmError) -> Self {
        DomainError::Validation(e.to_string())
    }
}
