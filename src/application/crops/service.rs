//! Crop service

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::crop::Crop;
use crate::domain::fertilizer::Fertilizer;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Debug, Clone)]
pub struct NewCrop {
    pub name: String,
    pub planted_area: f64,
    pub planted_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCrop {
    pub name: Option<String>,
    pub planted_area: Option<f64>,
    pub planted_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
}

pub struct CropService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CropService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn ensure_farm(&self, farm_id: i32) -> DomainResult<()> {
        match self.repos.farms().find_by_id(farm_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Farm", farm_id)),
        }
    }

    /// Plant a crop on an existing farm.
    pub async fn create_crop(&self, farm_id: i32, new: NewCrop) -> DomainResult<Crop> {
        let crop = Crop::new(
            new.name,
            new.planted_area,
            farm_id,
            new.planted_date,
            new.harvest_date,
        )?;
        self.ensure_farm(farm_id).await?;

        let crop = self.repos.crops().save(crop).await?;
        info!(crop_id = crop.id(), farm_id, name = %crop.name(), "Crop created");
        Ok(crop)
    }

    pub async fn list_crops(&self) -> DomainResult<Vec<Crop>> {
        self.repos.crops().find_all().await
    }

    pub async fn list_crops_by_farm(&self, farm_id: i32) -> DomainResult<Vec<Crop>> {
        self.ensure_farm(farm_id).await?;
        self.repos.crops().find_by_farm_id(farm_id).await
    }

    pub async fn get_crop(&self, id: i32) -> DomainResult<Crop> {
        self.repos
            .crops()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Crop", id))
    }

    pub async fn update_crop(&self, id: i32, changes: UpdateCrop) -> DomainResult<Crop> {
        let mut crop = self.get_crop(id).await?;

        if let Some(name) = changes.name {
            crop.change_name(name)?;
        }
        if let Some(area) = changes.planted_area {
            crop.change_planted_area(area)?;
        }
        if changes.planted_date.is_some() || changes.harvest_date.is_some() {
            let planted = changes.planted_date.or(crop.planted_date());
            let harvest = changes.harvest_date.or(crop.harvest_date());
            crop.change_dates(planted, harvest)?;
        }

        let crop = self.repos.crops().update(crop).await?;
        info!(crop_id = id, "Crop updated");
        Ok(crop)
    }

    pub async fn delete_crop(&self, id: i32) -> DomainResult<()> {
        self.get_crop(id).await?;
        self.repos.crops().delete(id).await?;
        info!(crop_id = id, "Crop deleted");
        Ok(())
    }

    /// Record that a fertilizer has been applied to a crop.
    pub async fn add_fertilizer_to_crop(
        &self,
        crop_id: i32,
        fertilizer_id: i32,
    ) -> DomainResult<()> {
        self.get_crop(crop_id).await?;
        if self
            .repos
            .fertilizers()
            .find_by_id(fertilizer_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("Fertilizer", fertilizer_id));
        }
        if self
            .repos
            .crops()
            .has_fertilizer(crop_id, fertilizer_id)
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "Fertilizer {} is already applied to crop {}",
                fertilizer_id, crop_id
            )));
        }

        self.repos
            .crops()
            .add_fertilizer(crop_id, fertilizer_id)
            .await?;
        info!(crop_id, fertilizer_id, "Fertilizer applied to crop");
        Ok(())
    }

    pub async fn list_fertilizers_by_crop(&self, crop_id: i32) -> DomainResult<Vec<Fertilizer>> {
        self.get_crop(crop_id).await?;
        self.repos.crops().find_fertilizers_by_crop_id(crop_id).await
    }
}
