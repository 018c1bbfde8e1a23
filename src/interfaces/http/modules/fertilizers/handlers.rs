//! Fertilizer API handlers

use std::sync::Arc;

use axum::extract::State;

use super::dto::{CreateFertilizerRequest, FertilizerResponse, UpdateFertilizerRequest};
use crate::application::FertilizerService;
use crate::interfaces::http::common::{
    created, domain_error, ok, ApiPath, ApiResponse, ApiResult, CreatedResult, EmptyData,
    ValidatedJson,
};

#[derive(Clone)]
pub struct FertilizerHandlerState {
    pub service: Arc<FertilizerService>,
}

#[utoipa::path(
    post,
    path = "/fertilizers",
    tag = "Fertilizers",
    request_body = CreateFertilizerRequest,
    responses(
        (status = 201, description = "Fertilizer created", body = ApiResponse<FertilizerResponse>),
        (status = 422, description = "Missing or empty fields")
    )
)]
pub async fn create_fertilizer(
    State(state): State<FertilizerHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateFertilizerRequest>,
) -> CreatedResult<FertilizerResponse> {
    let fertilizer = state
        .service
        .create_fertilizer(&request.name, &request.brand, &request.composition)
        .await
        .map_err(domain_error)?;
    Ok(created(fertilizer.into()))
}

#[utoipa::path(
    get,
    path = "/fertilizers",
    tag = "Fertilizers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All fertilizers", body = ApiResponse<Vec<FertilizerResponse>>),
        (status = 403, description = "Requires ADMIN")
    )
)]
pub async fn list_fertilizers(
    State(state): State<FertilizerHandlerState>,
) -> ApiResult<Vec<FertilizerResponse>> {
    let fertilizers = state.service.list_fertilizers().await.map_err(domain_error)?;
    Ok(ok(fertilizers
        .into_iter()
        .map(FertilizerResponse::from)
        .collect()))
}

#[utoipa::path(
    get,
    path = "/fertilizers/{id}",
    tag = "Fertilizers",
    params(("id" = i32, Path, description = "Fertilizer id")),
    responses(
        (status = 200, description = "Fertilizer", body = ApiResponse<FertilizerResponse>),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn get_fertilizer(
    State(state): State<FertilizerHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<FertilizerResponse> {
    let fertilizer = state.service.get_fertilizer(id).await.map_err(domain_error)?;
    Ok(ok(fertilizer.into()))
}

#[utoipa::path(
    put,
    path = "/fertilizers/{id}",
    tag = "Fertilizers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Fertilizer id")),
    request_body = UpdateFertilizerRequest,
    responses(
        (status = 200, description = "Fertilizer updated", body = ApiResponse<FertilizerResponse>),
        (status = 403, description = "Requires ADMIN"),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn update_fertilizer(
    State(state): State<FertilizerHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<UpdateFertilizerRequest>,
) -> ApiResult<FertilizerResponse> {
    let fertilizer = state
        .service
        .update_fertilizer(id, request.into())
        .await
        .map_err(domain_error)?;
    Ok(ok(fertilizer.into()))
}

#[utoipa::path(
    delete,
    path = "/fertilizers/{id}",
    tag = "Fertilizers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Fertilizer id")),
    responses(
        (status = 200, description = "Fertilizer deleted"),
        (status = 403, description = "Requires ADMIN"),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn delete_fertilizer(
    State(state): State<FertilizerHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<EmptyData> {
    state
        .service
        .delete_fertilizer(id)
        .await
        .map_err(domain_error)?;
    Ok(ok(EmptyData {}))
}
