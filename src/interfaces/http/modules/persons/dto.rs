//! Person DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Person, Role};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "joao")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "s3cretpass")]
    pub password: String,
    /// `USER`, `MANAGER`, `ADMIN` or the `ROLE_` form; defaults to `USER`
    #[schema(example = "USER")]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Required when changing one's own password
    pub current_password: Option<String>,
    #[validate(length(min = 1, message = "new password is required"))]
    pub new_password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeRoleRequest {
    #[validate(length(min = 1, message = "role is required"))]
    #[schema(example = "MANAGER")]
    pub role: String,
}

/// Public view of a person; the password hash never leaves the server
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id(),
            username: p.username().to_string(),
            role: p.role(),
            created_at: p.created_at(),
            updated_at: p.updated_at(),
        }
    }
}
