//! Crop API handlers

use std::sync::Arc;

use axum::extract::State;

use super::dto::{CreateCropRequest, CropFertilizerResponse, CropResponse, UpdateCropRequest};
use crate::application::CropService;
use crate::interfaces::http::common::{
    created, domain_error, ok, ApiPath, ApiResponse, ApiResult, CreatedResult, EmptyData,
    ValidatedJson,
};
use crate::interfaces::http::modules::fertilizers::FertilizerResponse;

#[derive(Clone)]
pub struct CropHandlerState {
    pub service: Arc<CropService>,
}

#[utoipa::path(
    post,
    path = "/farms/{id}/crops",
    tag = "Crops",
    params(("id" = i32, Path, description = "Farm id")),
    request_body = CreateCropRequest,
    responses(
        (status = 201, description = "Crop planted", body = ApiResponse<CropResponse>),
        (status = 400, description = "Invalid area or dates"),
        (status = 404, description = "Farm not found"),
        (status = 422, description = "Missing or empty fields")
    )
)]
pub async fn create_crop(
    State(state): State<CropHandlerState>,
    ApiPath(farm_id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<CreateCropRequest>,
) -> CreatedResult<CropResponse> {
    let crop = state
        .service
        .create_crop(farm_id, request.into())
        .await
        .map_err(domain_error)?;
    Ok(created(crop.into()))
}

#[utoipa::path(
    get,
    path = "/farms/{id}/crops",
    tag = "Crops",
    params(("id" = i32, Path, description = "Farm id")),
    responses(
        (status = 200, description = "Crops of the farm", body = ApiResponse<Vec<CropResponse>>),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn list_crops_by_farm(
    State(state): State<CropHandlerState>,
    ApiPath(farm_id): ApiPath<i32>,
) -> ApiResult<Vec<CropResponse>> {
    let crops = state
        .service
        .list_crops_by_farm(farm_id)
        .await
        .map_err(domain_error)?;
    Ok(ok(crops.into_iter().map(CropResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/crops",
    tag = "Crops",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All crops", body = ApiResponse<Vec<CropResponse>>),
        (status = 403, description = "Requires MANAGER or ADMIN")
    )
)]
pub async fn list_crops(State(state): State<CropHandlerState>) -> ApiResult<Vec<CropResponse>> {
    let crops = state.service.list_crops().await.map_err(domain_error)?;
    Ok(ok(crops.into_iter().map(CropResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/crops/{id}",
    tag = "Crops",
    params(("id" = i32, Path, description = "Crop id")),
    responses(
        (status = 200, description = "Crop", body = ApiResponse<CropResponse>),
        (status = 404, description = "Crop not found")
    )
)]
pub async fn get_crop(
    State(state): State<CropHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<CropResponse> {
    let crop = state.service.get_crop(id).await.map_err(domain_error)?;
    Ok(ok(crop.into()))
}

#[utoipa::path(
    put,
    path = "/crops/{id}",
    tag = "Crops",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Crop id")),
    request_body = UpdateCropRequest,
    responses(
        (status = 200, description = "Crop updated", body = ApiResponse<CropResponse>),
        (status = 400, description = "Invalid area or dates"),
        (status = 403, description = "Requires MANAGER or ADMIN"),
        (status = 404, description = "Crop not found")
    )
)]
pub async fn update_crop(
    State(state): State<CropHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateCropRequest>,
) -> ApiResult<CropResponse> {
    let crop = state
        .service
        .update_crop(id, request.into())
        .await
        .map_err(domain_error)?;
    Ok(ok(crop.into()))
}

#[utoipa::path(
    delete,
    path = "/crops/{id}",
    tag = "Crops",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Crop id")),
    responses(
        (status = 200, description = "Crop deleted"),
        (status = 403, description = "Requires MANAGER or ADMIN"),
        (status = 404, description = "Crop not found")
    )
)]
pub async fn delete_crop(
    State(state): State<CropHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<EmptyData> {
    state.service.delete_crop(id).await.map_err(domain_error)?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    post,
    path = "/crops/{id}/fertilizers/{fertilizer_id}",
    tag = "Crops",
    params(
        ("id" = i32, Path, description = "Crop id"),
        ("fertilizer_id" = i32, Path, description = "Fertilizer id")
    ),
    responses(
        (status = 201, description = "Fertilizer applied", body = ApiResponse<CropFertilizerResponse>),
        (status = 404, description = "Crop or fertilizer not found"),
        (status = 409, description = "Already applied")
    )
)]
pub async fn add_fertilizer_to_crop(
    State(state): State<CropHandlerState>,
    ApiPath((crop_id, fertilizer_id)): ApiPath<(i32, i32)>,
) -> CreatedResult<CropFertilizerResponse> {
    state
        .service
        .add_fertilizer_to_crop(crop_id, fertilizer_id)
        .await
        .map_err(domain_error)?;
    Ok(created(CropFertilizerResponse {
        crop_id,
        fertilizer_id,
    }))
}

#[utoipa::path(
    get,
    path = "/crops/{id}/fertilizers",
    tag = "Crops",
    params(("id" = i32, Path, description = "Crop id")),
    responses(
        (status = 200, description = "Fertilizers applied to the crop", body = ApiResponse<Vec<FertilizerResponse>>),
        (status = 404, description = "Crop not found")
    )
)]
pub async fn list_crop_fertilizers(
    State(state): State<CropHandlerState>,
    ApiPath(crop_id): ApiPath<i32>,
) -> ApiResult<Vec<FertilizerResponse>> {
    let fertilizers = state
        .service
        .list_fertilizers_by_crop(crop_id)
        .await
        .map_err(domain_error)?;
    Ok(ok(fertilizers
        .into_iter()
        .map(FertilizerResponse::from)
        .collect()))
}
