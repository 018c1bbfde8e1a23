//! Person domain entity

use chrono::{DateTime, Utc};

use super::errors::PersonError;
use super::password::{Password, PasswordHasher};
use super::role::{Resource, Role};

pub const MIN_USERNAME_LENGTH: usize = 3;

/// An account that can authenticate against the API.
#[derive(Debug, Clone)]
pub struct Person {
    id: i32,
    username: String,
    password: Password,
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Person {
    pub fn new(
        username: impl Into<String>,
        plain_password: &str,
        role: Role,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, PersonError> {
        let username = validate_username(username.into())?;
        let password = Password::new(plain_password, hasher)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            username,
            password,
            role,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: i32,
        username: String,
        password_hash: String,
        role: Role,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password: Password::from_hash(password_hash),
            role,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        self.password.hash()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Check `plain` against the stored hash.
    pub fn authenticate(
        &self,
        plain: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<(), PersonError> {
        if self.password.verify(plain, hasher)? {
            Ok(())
        } else {
            Err(PersonError::InvalidCredentials)
        }
    }

    pub fn change_password(
        &mut self,
        old: &str,
        new: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<(), PersonError> {
        self.authenticate(old, hasher)?;
        if old == new {
            return Err(PersonError::SamePassword);
        }
        self.password = Password::new(new, hasher)?;
        self.touch();
        Ok(())
    }

    /// Replace the password without knowing the old one (admin reset).
    pub fn reset_password(
        &mut self,
        new: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<(), PersonError> {
        self.password = Password::new(new, hasher)?;
        self.touch();
        Ok(())
    }

    pub fn promote_to_role(&mut self, role: Role) -> Result<(), PersonError> {
        if self.role == role {
            return Err(PersonError::SameRole);
        }
        self.role = role;
        self.touch();
        Ok(())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn has_minimum_role(&self, role: Role) -> bool {
        self.role.has_permission(role)
    }

    pub fn can_access(&self, resource: Resource) -> bool {
        self.role.can_access(resource)
    }

    pub fn is_valid(&self) -> bool {
        self.username.chars().count() >= MIN_USERNAME_LENGTH && self.password.is_valid()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_username(username: String) -> Result<String, PersonError> {
    if username.trim().chars().count() < MIN_USERNAME_LENGTH {
        return Err(PersonError::InvalidUsername {
            min: MIN_USERNAME_LENGTH,
        });
    }
    Ok(username)
}
