//! Farm repository interface

use async_trait::async_trait;

use super::model::Farm;
use crate::domain::DomainResult;

#[async_trait]
pub trait FarmRepository: Send + Sync {
    /// Persist a new farm and return it with its assigned id.
    async fn save(&self, farm: Farm) -> DomainResult<Farm>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Farm>>;
    async fn find_all(&self) -> DomainResult<Vec<Farm>>;
    async fn update(&self, farm: Farm) -> DomainResult<Farm>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
