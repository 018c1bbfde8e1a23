//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Extension};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::{AuthService, PersonService};
use crate::interfaces::http::common::{domain_error, ok, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::persons::PersonResponse;

#[derive(Clone)]
pub struct AuthHandlerState {
    pub auth: Arc<AuthService>,
    pub persons: Arc<PersonService>,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let result = state
        .auth
        .login(&request.username, &request.password)
        .await
        .map_err(domain_error)?;

    Ok(ok(LoginResponse {
        token: result.token,
        token_type: result.token_type,
        expires_in: result.expires_in,
        person: result.person.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current person", body = ApiResponse<PersonResponse>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn get_current_person(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<PersonResponse> {
    let person = state
        .persons
        .get_person(user.person_id)
        .await
        .map_err(domain_error)?;
    Ok(ok(person.into()))
}
