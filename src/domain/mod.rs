pub mod crop;
pub mod farm;
pub mod fertilizer;
pub mod person;
pub mod repositories;

pub use crop::{Crop, CropError, CropRepository};
pub use farm::{Farm, FarmError, FarmRepository, FarmSize};
pub use fertilizer::{Fertilizer, FertilizerError, FertilizerRepository};
pub use person::{Person, PersonError, PersonRepository, Resource, Role};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
