//! Roles and the static role-membership table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::PersonError;

/// Hierarchical access role. `User < Manager < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }

    /// `ROLE_`-prefixed spelling
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }

    pub fn level(&self) -> u8 {
        match self {
            Role::User => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    /// True when this role ranks at or above `required`.
    pub fn has_permission(&self, required: Role) -> bool {
        self.level() >= required.level()
    }

    pub fn can_access(&self, resource: Resource) -> bool {
        resource.allowed_roles().contains(self)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match bare {
            "USER" => Ok(Role::User),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(PersonError::InvalidRole(s.to_string())),
        }
    }
}

/// Protected resource families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Farms,
    Crops,
    Fertilizers,
    Persons,
}

impl Resource {
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Resource::Farms => &[Role::User, Role::Manager, Role::Admin],
            Resource::Crops => &[Role::Manager, Role::Admin],
            Resource::Fertilizers | Resource::Persons => &[Role::Admin],
        }
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farms" => Ok(Resource::Farms),
            "crops" => Ok(Resource::Crops),
            "fertilizers" => Ok(Resource::Fertilizers),
            "persons" => Ok(Resource::Persons),
            other => Err(format!("unknown resource: {}", other)),
        }
    }
}
