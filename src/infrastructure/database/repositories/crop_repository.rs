//! SeaORM implementation of CropRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::debug;

use super::fertilizer_repository::entity_to_domain as fertilizer_to_domain;
use super::{db_err, is_unique_violation, update_err};
use crate::domain::crop::{Crop, CropRepository};
use crate::domain::fertilizer::Fertilizer;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{crop, crop_fertilizer, fertilizer};

fn entity_to_domain(m: crop::Model) -> Crop {
    Crop::restore(
        m.id,
        m.name,
        m.planted_area,
        m.farm_id,
        m.planting_date,
        m.harvest_date,
        m.created_at,
        m.updated_at,
    )
}

pub struct SeaOrmCropRepository {
    db: DatabaseConnection,
}

impl SeaOrmCropRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CropRepository for SeaOrmCropRepository {
    async fn save(&self, c: Crop) -> DomainResult<Crop> {
        let model = crop::ActiveModel {
            name: Set(c.name().to_string()),
            planted_area: Set(c.planted_area()),
            farm_id: Set(c.farm_id()),
            planting_date: Set(c.planted_date()),
            harvest_date: Set(c.harvest_date()),
            created_at: Set(c.created_at()),
            updated_at: Set(c.updated_at()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        debug!(crop_id = result.id, farm_id = result.farm_id, "Crop inserted");
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Crop>> {
        let model = crop::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Crop>> {
        let models = crop::Entity::find()
            .order_by_asc(crop::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_farm_id(&self, farm_id: i32) -> DomainResult<Vec<Crop>> {
        let models = crop::Entity::find()
            .filter(crop::Column::FarmId.eq(farm_id))
            .order_by_asc(crop::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, c: Crop) -> DomainResult<Crop> {
        let model = crop::ActiveModel {
            id: Set(c.id()),
            name: Set(c.name().to_string()),
            planted_area: Set(c.planted_area()),
            farm_id: Set(c.farm_id()),
            planting_date: Set(c.planted_date()),
            harvest_date: Set(c.harvest_date()),
            created_at: Set(c.created_at()),
            updated_at: Set(c.updated_at()),
        };
        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("Crop", c.id()))?;
        Ok(entity_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = crop::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Crop", id));
        }
        Ok(())
    }

    async fn add_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<()> {
        let link = crop_fertilizer::ActiveModel {
            crop_id: Set(crop_id),
            fertilizer_id: Set(fertilizer_id),
        };
        crop_fertilizer::Entity::insert(link)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict(format!(
                        "Fertilizer {} is already applied to crop {}",
                        fertilizer_id, crop_id
                    ))
                } else {
                    db_err(e)
                }
            })?;
        debug!(crop_id, fertilizer_id, "Fertilizer linked to crop");
        Ok(())
    }

    async fn has_fertilizer(&self, crop_id: i32, fertilizer_id: i32) -> DomainResult<bool> {
        let link = crop_fertilizer::Entity::find_by_id((crop_id, fertilizer_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(link.is_some())
    }

    async fn find_fertilizers_by_crop_id(&self, crop_id: i32) -> DomainResult<Vec<Fertilizer>> {
        let models = fertilizer::Entity::find()
            .join(JoinType::InnerJoin, fertilizer::Relation::CropFertilizer.def())
            .filter(crop_fertilizer::Column::CropId.eq(crop_id))
            .order_by_asc(fertilizer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(fertilizer_to_domain).collect())
    }
}
