//! Person API handlers

use std::str::FromStr;
use std::sync::Arc;

use axum::{extract::State, Extension};

use super::dto::{ChangePasswordRequest, ChangeRoleRequest, CreatePersonRequest, PersonResponse};
use crate::application::PersonService;
use crate::domain::{DomainError, Role};
use crate::interfaces::http::common::{
    created, domain_error, ok, ApiPath, ApiResponse, ApiResult, CreatedResult, EmptyData,
    ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct PersonHandlerState {
    pub service: Arc<PersonService>,
}

fn parse_role(raw: &str) -> Result<Role, DomainError> {
    Role::from_str(raw).map_err(DomainError::from)
}

#[utoipa::path(
    post,
    path = "/persons",
    tag = "Persons",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person registered", body = ApiResponse<PersonResponse>),
        (status = 400, description = "Username, password or role invalid"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_person(
    State(state): State<PersonHandlerState>,
    ValidatedJson(request): ValidatedJson<CreatePersonRequest>,
) -> CreatedResult<PersonResponse> {
    let role = match request.role.as_deref() {
        Some(raw) => parse_role(raw).map_err(domain_error)?,
        None => Role::User,
    };
    let person = state
        .service
        .create_person(&request.username, &request.password, role)
        .await
        .map_err(domain_error)?;
    Ok(created(person.into()))
}

#[utoipa::path(
    get,
    path = "/persons",
    tag = "Persons",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All persons", body = ApiResponse<Vec<PersonResponse>>),
        (status = 403, description = "Requires ADMIN")
    )
)]
pub async fn list_persons(
    State(state): State<PersonHandlerState>,
) -> ApiResult<Vec<PersonResponse>> {
    let persons = state.service.list_persons().await.map_err(domain_error)?;
    Ok(ok(persons.into_iter().map(PersonResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person", body = ApiResponse<PersonResponse>),
        (status = 403, description = "Requires ADMIN"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<PersonHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<PersonResponse> {
    let person = state.service.get_person(id).await.map_err(domain_error)?;
    Ok(ok(person.into()))
}

#[utoipa::path(
    put,
    path = "/persons/{id}/password",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "New password too short or unchanged"),
        (status = 401, description = "Current password wrong"),
        (status = 403, description = "Only the owner or an ADMIN may change it")
    )
)]
pub async fn change_password(
    State(state): State<PersonHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<EmptyData> {
    let result = if user.person_id == id {
        let Some(current) = request.current_password.as_deref() else {
            return Err(domain_error(DomainError::Validation(
                "current password is required".into(),
            )));
        };
        state
            .service
            .change_password(id, current, &request.new_password)
            .await
    } else if user.is_admin() {
        state.service.reset_password(id, &request.new_password).await
    } else {
        Err(DomainError::Forbidden(
            "cannot change another person's password".into(),
        ))
    };

    result.map_err(domain_error)?;
    Ok(ok(EmptyData {}))
}

#[utoipa::path(
    put,
    path = "/persons/{id}/role",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    request_body = ChangeRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = ApiResponse<PersonResponse>),
        (status = 400, description = "Unknown role or role unchanged"),
        (status = 403, description = "Requires ADMIN"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn change_role(
    State(state): State<PersonHandlerState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(request): ValidatedJson<ChangeRoleRequest>,
) -> ApiResult<PersonResponse> {
    let role = parse_role(&request.role).map_err(domain_error)?;
    let person = state
        .service
        .change_role(id, role)
        .await
        .map_err(domain_error)?;
    Ok(ok(person.into()))
}

#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person deleted"),
        (status = 403, description = "Requires ADMIN"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<PersonHandlerState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<EmptyData> {
    state.service.delete_person(id).await.map_err(domain_error)?;
    Ok(ok(EmptyData {}))
}
