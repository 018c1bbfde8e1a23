//! Fertilizer service

use std::sync::Arc;

use tracing::info;

use crate::domain::fertilizer::Fertilizer;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Debug, Clone, Default)]
pub struct UpdateFertilizer {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub composition: Option<String>,
}

pub struct FertilizerService {
    repos: Arc<dyn RepositoryProvider>,
}

impl FertilizerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create_fertilizer(
        &self,
        name: &str,
        brand: &str,
        composition: &str,
    ) -> DomainResult<Fertilizer> {
        let fertilizer = Fertilizer::new(name, brand, composition)?;
        let fertilizer = self.repos.fertilizers().save(fertilizer).await?;
        info!(fertilizer_id = fertilizer.id(), name = %fertilizer.name(), "Fertilizer created");
        Ok(fertilizer)
    }

    pub async fn list_fertilizers(&self) -> DomainResult<Vec<Fertilizer>> {
        self.repos.fertilizers().find_all().await
    }

    pub async fn get_fertilizer(&self, id: i32) -> DomainResult<Fertilizer> {
        self.repos
            .fertilizers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Fertilizer", id))
    }

    pub async fn update_fertilizer(
        &self,
        id: i32,
        changes: UpdateFertilizer,
    ) -> DomainResult<Fertilizer> {
        let mut fertilizer = self.get_fertilizer(id).await?;

        if let Some(name) = changes.name {
            fertilizer.change_name(name)?;
        }
        if let Some(brand) = changes.brand {
            fertilizer.change_brand(brand)?;
        }
        if let Some(composition) = changes.composition {
            fertilizer.change_composition(composition)?;
        }

        let fertilizer = self.repos.fertilizers().update(fertilizer).await?;
        info!(fertilizer_id = id, "Fertilizer updated");
        Ok(fertilizer)
    }

    pub async fn delete_fertilizer(&self, id: i32) -> DomainResult<()> {
        self.get_fertilizer(id).await?;
        self.repos.fertilizers().delete(id).await?;
        info!(fertilizer_id = id, "Fertilizer deleted");
        Ok(())
    }
}
