use thiserror::Error;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FertilizerError {
    #[error("fertilizer name cannot be empty")]
    InvalidName,

    #[error("fertilizer brand cannot be empty")]
    InvalidBrand,

    #[error("fertilizer composition cannot be empty")]
    InvalidComposition,
}

impl From<FertilizerError> for DomainError {
    fn from(e: FertilizerError) -> Self {
        DomainError::Validation(e.to_string())
    }
}
