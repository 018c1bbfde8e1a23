//! SeaORM implementation of FertilizerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{db_err, update_err};
use crate::domain::fertilizer::{Fertilizer, FertilizerRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::fertilizer;

pub(crate) fn entity_to_domain(m: fertilizer::Model) -> Fertilizer {
    Fertilizer::restore(
        m.id,
        m.name,
        m.brand,
        m.composition,
        m.created_at,
        m.updated_at,
    )
}

pub struct SeaOrmFertilizerRepository {
    db: DatabaseConnection,
}

impl SeaOrmFertilizerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FertilizerRepository for SeaOrmFertilizerRepository {
    async fn save(&self, f: Fertilizer) -> DomainResult<Fertilizer> {
        let model = fertilizer::ActiveModel {
            name: Set(f.name().to_string()),
            brand: Set(f.brand().to_string()),
            composition: Set(f.composition().to_string()),
            created_at: Set(f.created_at()),
            updated_at: Set(f.updated_at()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        debug!(fertilizer_id = result.id, "Fertilizer inserted");
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Fertilizer>> {
        let model = fertilizer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Fertilizer>> {
        let models = fertilizer::Entity::find()
            .order_by_asc(fertilizer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, f: Fertilizer) -> DomainResult<Fertilizer> {
        let model = fertilizer::ActiveModel {
            id: Set(f.id()),
            name: Set(f.name().to_string()),
            brand: Set(f.brand().to_string()),
            composition: Set(f.composition().to_string()),
            created_at: Set(f.created_at()),
            updated_at: Set(f.updated_at()),
        };
        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("Fertilizer", f.id()))?;
        Ok(entity_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = fertilizer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Fertilizer", id));
        }
        Ok(())
    }
}
