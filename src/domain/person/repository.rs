//! Person repository interface

use async_trait::async_trait;

use super::model::Person;
use crate::domain::DomainResult;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persist a new person. A taken username yields `DomainError::Conflict`.
    async fn save(&self, person: Person) -> DomainResult<Person>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Person>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Person>>;
    async fn find_all(&self) -> DomainResult<Vec<Person>>;
    async fn update(&self, person: Person) -> DomainResult<Person>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn username_exists(&self, username: &str) -> DomainResult<bool>;
    async fn count(&self) -> DomainResult<u64>;
}
