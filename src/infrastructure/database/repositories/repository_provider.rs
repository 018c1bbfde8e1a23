//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::crop::CropRepository;
use crate::domain::farm::FarmRepository;
use crate::domain::fertilizer::FertilizerRepository;
use crate::domain::person::PersonRepository;
use crate::domain::repositories::RepositoryProvider;

use super::crop_repository::SeaOrmCropRepository;
use super::farm_repository::SeaOrmFarmRepository;
use super::fertilizer_repository::SeaOrmFertilizerRepository;
use super::person_repository::SeaOrmPersonRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let farm = repos.farms().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    farms: SeaOrmFarmRepository,
    crops: SeaOrmCropRepository,
    fertilizers: SeaOrmFertilizerRepository,
    persons: SeaOrmPersonRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            farms: SeaOrmFarmRepository::new(db.clone()),
            crops: SeaOrmCropRepository::new(db.clone()),
            fertilizers: SeaOrmFertilizerRepository::new(db.clone()),
            persons: SeaOrmPersonRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn farms(&self) -> &dyn FarmRepository {
        &self.farms
    }

    fn crops(&self) -> &dyn CropRepository {
        &self.crops
    }

    fn fertilizers(&self) -> &dyn FertilizerRepository {
        &self.fertilizers
    }

    fn persons(&self) -> &dyn PersonRepository {
        &self.persons
    }
}
