//! Farm API handlers

use std::sync::Arc;

use axum::extract::State;

use super::dto::{CreateFarmRequest, FarmResponse, UpdateFarmRequest};
use crate::application::FarmService;
use crate::interfaces::http::common::{
    created, domain_error, ok, ApiPath, ApiResponse, ApiResult, CreatedResult, EmptyData,
    ValidatedJson,
};

#[derive(Clone)]
pub struct FarmHandlerState {
    pub service: Arc<FarmService>,
}

#[utoipa::path(
    post,
    path = "/farms",
    tag = "Farms",
    request_body = CreateFarmRequest,
    responses(
        (status = 201, description = "Farm created", body = ApiResponse<FarmResponse>),
        (status = 400, description = "Invalid size or malformed JSON"),
        (status = 422, description = "Missing or empty fields")
    )
)]
pub async fn create_farm(
    State(state): State<FarmHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateFarmRequest>,
) -> CreatedResult<FarmResponse> {
    let farm = state
        .service
        .create_farm(&request.name, request.size)
        .await
        .map_err(domain_error)?;
    Ok(created(farm.into()))
}

#[utoipa::path(
    get,
    path = "/farms",
    tag = "Farms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All farms", body = ApiResponse<Vec<FarmResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_farms(State(state): State<FarmHandlerState>) -> ApiResult<Vec<FarmResponse>> {
    let farms = state.service.list_farms().await.map_err(domain_error)?;
    Ok(ok(farms.into_iter().map(FarmResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/farms/{id}",
    tag = "Farms",
    params(("id" = i32, Path, description = "Farm id")),
    responses(
        (status = 200, description = "Farm", body = ApiResponse<FarmResponse>),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn get_farm(
    State(state): State<FarmHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<FarmResponse> {
    let farm = state.service.get_farm(id).await.map_err(domain_error)?;
    Ok(ok(farm.into()))
}

#[utoipa::path(
    put,
    path = "/farms/{id}",
    tag = "Farms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Farm id")),
    request_body = UpdateFarmRequest,
    responses(
        (status = 200, description = "Farm updated", body = ApiResponse<FarmResponse>),
        (status = 403, description = "Requires MANAGER or ADMIN"),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn update_farm(
    State(state): State<FarmHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateFarmRequest>,
) -> ApiResult<FarmResponse> {
    let farm = state
        .service
        .update_farm(id, request.into())
        .await
        .map_err(domain_error)?;
    Ok(ok(farm.into()))
}

#[utoipa::path(
    delete,
    path = "/farms/{id}",
    tag = "Farms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Farm id")),
    responses(
        (status = 200, description = "Farm and its crops deleted"),
        (status = 403, description = "Requires MANAGER or ADMIN"),
        (status = 404, description = "Farm not found")
    )
)]
pub async fn delete_farm(
    State(state): State<FarmHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<EmptyData> {
    state.service.delete_farm(id).await.map_err(domain_error)?;
    Ok(ok(EmptyData {}))
}
