//! Fertilizer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::UpdateFertilizer;
use crate::domain::Fertilizer;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFertilizerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Ureia")]
    pub name: String,
    #[validate(length(min = 1, message = "brand is required"))]
    #[schema(example = "Yara")]
    pub brand: String,
    #[validate(length(min = 1, message = "composition is required"))]
    #[schema(example = "N 45%")]
    pub composition: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFertilizerRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "brand cannot be empty"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "composition cannot be empty"))]
    pub composition: Option<String>,
}

impl From<UpdateFertilizerRequest> for UpdateFertilizer {
    fn from(r: UpdateFertilizerRequest) -> Self {
        UpdateFertilizer {
            name: r.name,
            brand: r.brand,
            composition: r.composition,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerResponse {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub composition: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Fertilizer> for FertilizerResponse {
    fn from(f: Fertilizer) -> Self {
        Self {
            id: f.id(),
            name: f.name().to_string(),
            brand: f.brand().to_string(),
            composition: f.composition().to_string(),
            created_at: f.created_at(),
            updated_at: f.updated_at(),
        }
    }
}
