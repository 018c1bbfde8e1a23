//! SeaORM implementation of PersonRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use super::{db_err, is_unique_violation};
use crate::domain::person::{Person, PersonRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::person;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: person::Model) -> Person {
    Person::restore(
        m.id,
        m.username,
        m.password_hash,
        m.role.into(),
        m.created_at,
        m.updated_at,
    )
}

fn username_conflict(username: &str) -> impl Fn(DbErr) -> DomainError + '_ {
    move |e| {
        if is_unique_violation(&e) {
            DomainError::Conflict(format!("Username '{}' is already taken", username))
        } else {
            db_err(e)
        }
    }
}

// ── Repository implementation ───────────────────────────────────

pub struct SeaOrmPersonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn save(&self, p: Person) -> DomainResult<Person> {
        let model = person::ActiveModel {
            username: Set(p.username().to_string()),
            password_hash: Set(p.password_hash().to_string()),
            role: Set(p.role().into()),
            created_at: Set(p.created_at()),
            updated_at: Set(p.updated_at()),
            ..Default::default()
        };
        let result = model
            .insert(&self.db)
            .await
            .map_err(username_conflict(p.username()))?;
        debug!(person_id = result.id, username = %result.username, "Person inserted");
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Person>> {
        let model = person::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Person>> {
        let model = person::Entity::find()
            .filter(person::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Person>> {
        let models = person::Entity::find()
            .order_by_asc(person::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, p: Person) -> DomainResult<Person> {
        let model = person::ActiveModel {
            id: Set(p.id()),
            username: Set(p.username().to_string()),
            password_hash: Set(p.password_hash().to_string()),
            role: Set(p.role().into()),
            created_at: Set(p.created_at()),
            updated_at: Set(p.updated_at()),
        };
        let updated = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found("Person", p.id()),
            other => username_conflict(p.username())(other),
        })?;
        Ok(entity_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = person::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Person", id));
        }
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> DomainResult<bool> {
        let count = person::Entity::find()
            .filter(person::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        person::Entity::find().count(&self.db).await.map_err(db_err)
    }
}
