//! Crop repository interface

use async_trait::async_trait;

use super::model::Crop;
use crate::domain::fertilizer::Fertilizer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CropRepository: Send + Sync {
    async fn save(&self, crop: Crop) -> DomainResult<Crop>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Crop>>;
    async fn find_all(&self) -> DomainResult<Vec<Crop>>;
    async fn find_by_farm_id(&self, farm_id: i32) -> DomainResult<Vec<Crop>>;
    async fn update(&self, crop: Crop) -> DomainResult<Crop>;
    async fn delete(&self, id: i32) -> DomainResult<()>;

    // Crop <-> fertilizer association
    async fn add_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<()>;
    async fn has_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<bool>;
    async fn find_fertilizers_by_crop_id(&self, crop_id: i32) -> DomainResult<Vec<Fertilizer>>;
}
