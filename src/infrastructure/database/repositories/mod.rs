//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod crop_repository;
pub mod farm_repository;
pub mod fertilizer_repository;
pub mod person_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("Duplicate") || msg.contains("duplicate")
}

/// Map an update error, turning "no row matched" into `NotFound`.
pub(crate) fn update_err(entity: &'static str, id: i32) -> impl Fn(DbErr) -> DomainError {
    move |e| match e {
        DbErr::RecordNotUpdated => DomainError::not_found(entity, id),
        other => db_err(other),
    }
}
