//! Fertilizer repository interface

use async_trait::async_trait;

use super::model::Fertilizer;
use crate::domain::DomainResult;

#[async_trait]
pub trait FertilizerRepository: Send + Sync {
    async fn save(&self, fertilizer: Fertilizer) -> DomainResult<Fertilizer>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fertilizer>>;
    async fn find_all(&self) -> DomainResult<Vec<Fertilizer>>;
    async fn update(&self, fertilizer: Fertilizer) -> DomainResult<Fertilizer>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
