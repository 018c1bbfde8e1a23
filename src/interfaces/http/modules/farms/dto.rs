//! Farm DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::UpdateFarm;
use crate::domain::Farm;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFarmRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Fazenda Boa Vista")]
    pub name: String,
    /// Hectares, greater than zero
    #[schema(example = 120.5)]
    pub size: f64,
}

/// Omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFarmRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    pub size: Option<f64>,
}

impl From<UpdateFarmRequest> for UpdateFarm {
    fn from(r: UpdateFarmRequest) -> Self {
        UpdateFarm {
            name: r.name,
            size: r.size,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FarmResponse {
    pub id: i32,
    pub name: String,
    pub size: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Farm> for FarmResponse {
    fn from(f: Farm) -> Self {
        Self {
            id: f.id(),
            name: f.name().to_string(),
            size: f.size().value(),
            created_at: f.created_at(),
            updated_at: f.updated_at(),
        }
    }
}
