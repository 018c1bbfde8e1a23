//! Crop DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{NewCrop, UpdateCrop};
use crate::domain::Crop;

/// Body for `POST /farms/{id}/crops`; the farm comes from the path
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCropRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Soja")]
    pub name: String,
    /// Hectares, greater than zero
    #[schema(example = 42.0)]
    pub planted_area: f64,
    #[schema(example = "2025-03-01")]
    pub planted_date: Option<NaiveDate>,
    #[schema(example = "2025-07-15")]
    pub harvest_date: Option<NaiveDate>,
}

impl From<CreateCropRequest> for NewCrop {
    fn from(r: CreateCropRequest) -> Self {
        NewCrop {
            name: r.name,
            planted_area: r.planted_area,
            planted_date: r.planted_date,
            harvest_date: r.harvest_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCropRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    pub planted_area: Option<f64>,
    pub planted_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
}

impl From<UpdateCropRequest> for UpdateCrop {
    fn from(r: UpdateCropRequest) -> Self {
        UpdateCrop {
            name: r.name,
            planted_area: r.planted_area,
            planted_date: r.planted_date,
            harvest_date: r.harvest_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropResponse {
    pub id: i32,
    pub name: String,
    pub planted_area: f64,
    pub farm_id: i32,
    pub planted_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Crop> for CropResponse {
    fn from(c: Crop) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_string(),
            planted_area: c.planted_area(),
            farm_id: c.farm_id(),
            planted_date: c.planted_date(),
            harvest_date: c.harvest_date(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
        }
    }
}

/// A fertilizer applied to a crop
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropFertilizerResponse {
    pub crop_id: i32,
    pub fertilizer_id: i32,
}
