//! Farm service

use std::sync::Arc;

use tracing::info;

use crate::domain::farm::Farm;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFarm {
    pub name: Option<String>,
    pub size: Option<f64>,
}

pub struct FarmService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FarmService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_farm(&self, name: &str, size: f64) -> DomainResult<Farm> {
        let farm = Farm::new(name, size)?;
        let farm = self.repos.farms().save(farm).await?;
        info!(farm_id = farm.id(), name = %farm.name(), "Farm created");
        Ok(farm)
    }

    pub async fn list_farms(&self) -> DomainResult<Vec<Farm>> {
        self.repos.farms().find_all().await
    }

    pub async fn get_farm(&self, id: i32) -> DomainResult<Farm> {
        self.repos
            .farms()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Farm", id))
    }

    pub async fn update_farm(&self, id: i32, changes: UpdateFarm) -> DomainResult<Farm> {
        let mut farm = self.get_farm(id).await?;

        if let Some(name) = changes.name {
            farm.change_name(name)?;
        }
        if let Some(size) = changes.size {
            farm.change_size(size)?;
        }

        let farm = self.repos.farms().update(farm).await?;
        info!(farm_id = id, "Farm updated");
        Ok(farm)
    }

    pub async fn delete_farm(&self, id: i32) -> DomainResult<()> {
        self.get_farm(id).await?;
        self.repos.farms().delete(id).await?;
        info!(farm_id = id, "Farm deleted");
        Ok(())
    }
}
