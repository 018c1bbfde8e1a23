//! Repository access for the domain layer
//!
//! - `RepositoryProvider`: one entry point to every per-aggregate repository
//! - `DomainResult`: standard result type for domain operations

use super::crop::CropRepository;
use super::farm::FarmRepository;
use super::fertilizer::FertilizerRepository;
use super::person::PersonRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let farm = repos.farms().find_by_id(1).await?;
///     let crops = repos.crops().find_by_farm_id(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn farms(&self) -> &dyn FarmRepository;
    fn crops(&self) -> &dyn CropRepository;
    fn fertilizers(&self) -> &dyn FertilizerRepository;
    fn persons(&self) -> &dyn PersonRepository;
}
