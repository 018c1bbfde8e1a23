//! SeaORM implementation of FarmRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{db_err, update_err};
use crate::domain::farm::{Farm, FarmRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::farm;

fn entity_to_domain(m: farm::Model) -> Farm {
    Farm::restore(m.id, m.name, m.size, m.created_at, m.updated_at)
}

pub struct SeaOrmFarmRepository {
    db: DatabaseConnection,
}

impl SeaOrmFarmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FarmRepository for SeaOrmFarmRepository {
    async fn save(&self, f: Farm) -> DomainResult<Farm> {
        let model = farm::ActiveModel {
            name: Set(f.name().to_string()),
            size: Set(f.size().value()),
            created_at: Set(f.created_at()),
            updated_at: Set(f.updated_at()),
            ..Default::default()
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        debug!(farm_id = result.id, "Farm inserted");
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Farm>> {
        let model = farm::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Farm>> {
        let models = farm::Entity::find()
            .order_by_asc(farm::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, f: Farm) -> DomainResult<Farm> {
        let model = farm::ActiveModel {
            id: Set(f.id()),
            name: Set(f.name().to_string()),
            size: Set(f.size().value()),
            created_at: Set(f.created_at()),
            updated_at: Set(f.updated_at()),
        };
        let updated = model
            .update(&self.db)
            .await
            .map_err(update_err("Farm", f.id()))?;
        Ok(entity_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = farm::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Farm", id));
        }
        Ok(())
    }
}
