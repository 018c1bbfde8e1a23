//! Person management service
//!
//! HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::info;

use super::with_hasher;
use crate::domain::person::{PasswordHasher, Person, Role};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

pub struct PersonService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
}

impl PersonService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repos, hasher }
    }

    // ── Commands ────────────────────────────────────────────────

    /// Register a person. Usernames are unique.
    pub async fn create_person(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> DomainResult<Person> {
        let (username, password) = (username.to_string(), password.to_string());
        let person = with_hasher(&self.hasher, move |h| {
            Person::new(username, &password, role, h)
        })
        .await?;

        if self
            .repos
            .persons()
            .username_exists(person.username())
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "Username '{}' is already taken",
                person.username()
            )));
        }

        let person = self.repos.persons().save(person).await?;
        info!(person_id = person.id(), username = %person.username(), role = %person.role(), "Person registered");
        Ok(person)
    }

    /// Change a password, proving knowledge of the current one.
    pub async fn change_password(
        &self,
        id: i32,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let person = self.get_person(id).await?;
        let (current, new) = (current_password.to_string(), new_password.to_string());
        let person = with_hasher(&self.hasher, move |h| {
            let mut person = person;
            person.change_password(&current, &new, h)?;
            Ok(person)
        })
        .await?;
        self.repos.persons().update(person).await?;
        info!(person_id = id, "Password changed");
        Ok(())
    }

    /// Administrative password reset.
    pub async fn reset_password(&self, id: i32, new_password: &str) -> DomainResult<()> {
        let person = self.get_person(id).await?;
        let new = new_password.to_string();
        let person = with_hasher(&self.hasher, move |h| {
            let mut person = person;
            person.reset_password(&new, h)?;
            Ok(person)
        })
        .await?;
        self.repos.persons().update(person).await?;
        info!(person_id = id, "Password reset");
        Ok(())
    }

    pub async fn change_role(&self, id: i32, role: Role) -> DomainResult<Person> {
        let mut person = self.get_person(id).await?;
        person.promote_to_role(role)?;
        let person = self.repos.persons().update(person).await?;
        info!(person_id = id, role = %role, "Role changed");
        Ok(person)
    }

    pub async fn delete_person(&self, id: i32) -> DomainResult<()> {
        self.get_person(id).await?;
        self.repos.persons().delete(id).await?;
        info!(person_id = id, "Person deleted");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_persons(&self) -> DomainResult<Vec<Person>> {
        self.repos.persons().find_all().await
    }

    pub async fn get_person(&self, id: i32) -> DomainResult<Person> {
        self.repos
            .persons()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Person", id))
    }

    pub async fn get_person_by_username(&self, username: &str) -> DomainResult<Person> {
        self.repos
            .persons()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Person",
                field: "username",
                value: username.to_string(),
            })
    }

    pub async fn count_persons(&self) -> DomainResult<u64> {
        self.repos.persons().count().await
    }
}
