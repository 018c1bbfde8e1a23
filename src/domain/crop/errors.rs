use thiserror::Error;

use crate::shared::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    #[error("crop name cannot be empty")]
    InvalidName,

    #[error("planted area must be greater than 0")]
    InvalidPlantedArea,

    #[error("farm id must be greater than 0")]
    InvalidFarmId,

    #[error("harvest date cannot be before planted date")]
    InvalidHarvestDate,
}

impl From<CropError> for DomainError {
    fn from(e: CropError) -> Self {
        DomainError::Validation(e.to_string())
    }
}
