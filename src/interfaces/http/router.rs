//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put, MethodRouter},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuthService, CropService, FarmService, FertilizerService, PersonService};
use crate::domain::person::PasswordHasher;
use crate::domain::{RepositoryProvider, Role};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, EmptyData};
use crate::interfaces::http::middleware::{
    auth_middleware, role_guard_middleware, AuthState, RoleGuard,
};
use crate::interfaces::http::modules::{
    auth, crops, farms, fertilizers, health, metrics, persons, request_id,
};

const MANAGERS: &[Role] = &[Role::Manager, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

/// Everything the HTTP layer needs from the outside
#[derive(Clone)]
pub struct ApiContext {
    pub repos: Arc<dyn RepositoryProvider>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub jwt_config: JwtConfig,
    /// Pinged by `/health`
    pub db: DatabaseConnection,
    /// `/metrics` is mounted only when a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::get_current_person,
        persons::create_person,
        persons::list_persons,
        persons::get_person,
        persons::change_password,
        persons::change_role,
        persons::delete_person,
        farms::create_farm,
        farms::list_farms,
        farms::get_farm,
        farms::update_farm,
        farms::delete_farm,
        crops::create_crop,
        crops::list_crops_by_farm,
        crops::list_crops,
        crops::get_crop,
        crops::update_crop,
        crops::delete_crop,
        crops::add_fertilizer_to_crop,
        crops::list_crop_fertilizers,
        fertilizers::create_fertilizer,
        fertilizers::list_fertilizers,
        fertilizers::get_fertilizer,
        fertilizers::update_fertilizer,
        fertilizers::delete_fertilizer,
    ),
    components(
        schemas(
            ApiResponse<String>,
            EmptyData,
            Role,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            persons::CreatePersonRequest,
            persons::ChangePasswordRequest,
            persons::ChangeRoleRequest,
            persons::PersonResponse,
            farms::CreateFarmRequest,
            farms::UpdateFarmRequest,
            farms::FarmResponse,
            crops::CreateCropRequest,
            crops::UpdateCropRequest,
            crops::CropResponse,
            crops::CropFertilizerResponse,
            fertilizers::CreateFertilizerRequest,
            fertilizers::UpdateFertilizerRequest,
            fertilizers::FertilizerResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Authentication", description = "Login (JWT) and current account"),
        (name = "Persons", description = "Accounts and roles"),
        (name = "Farms", description = "Farm management"),
        (name = "Crops", description = "Crops planted on farms and the fertilizers applied to them"),
        (name = "Fertilizers", description = "Fertilizer catalogue"),
    ),
    info(
        title = "CropFlow API",
        version = "1.0.0",
        description = "REST API for farms, crops, fertilizers and the people who manage them"
    )
)]
pub struct ApiDoc;

/// Any valid bearer token
fn authenticated<S>(route: MethodRouter<S>, auth: &AuthState) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(middleware::from_fn_with_state(auth.clone(), auth_middleware))
}

/// Valid bearer token whose role is in `allowed`
fn restricted<S>(route: MethodRouter<S>, auth: &AuthState, allowed: &'static [Role]) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(middleware::from_fn_with_state(
        RoleGuard::new(auth.clone(), allowed),
        role_guard_middleware,
    ))
}

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext) -> Router {
    let auth_state = AuthState {
        jwt_config: ctx.jwt_config.clone(),
    };

    let person_service = Arc::new(PersonService::new(ctx.repos.clone(), ctx.hasher.clone()));
    let auth_service = Arc::new(AuthService::new(
        ctx.repos.clone(),
        ctx.hasher.clone(),
        ctx.jwt_config.clone(),
    ));

    // ── Auth ───────────────────────────────────────────────────
    let auth_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/auth/me",
            authenticated(get(auth::get_current_person), &auth_state),
        )
        .with_state(auth::AuthHandlerState {
            auth: auth_service,
            persons: person_service.clone(),
        });

    // ── Persons ────────────────────────────────────────────────
    let person_routes = Router::new()
        .route(
            "/persons",
            post(persons::create_person).merge(restricted(
                get(persons::list_persons),
                &auth_state,
                ADMINS,
            )),
        )
        .route(
            "/persons/{id}",
            restricted(
                get(persons::get_person).delete(persons::delete_person),
                &auth_state,
                ADMINS,
            ),
        )
        .route(
            "/persons/{id}/password",
            authenticated(put(persons::change_password), &auth_state),
        )
        .route(
            "/persons/{id}/role",
            restricted(put(persons::change_role), &auth_state, ADMINS),
        )
        .with_state(persons::PersonHandlerState {
            service: person_service,
        });

    // ── Farms ──────────────────────────────────────────────────
    let farm_routes = Router::new()
        .route(
            "/farms",
            post(farms::create_farm).merge(restricted(
                get(farms::list_farms),
                &auth_state,
                &Role::ALL,
            )),
        )
        .route(
            "/farms/{id}",
            get(farms::get_farm).merge(restricted(
                put(farms::update_farm).delete(farms::delete_farm),
                &auth_state,
                MANAGERS,
            )),
        )
        .with_state(farms::FarmHandlerState {
            service: Arc::new(FarmService::new(ctx.repos.clone())),
        });

    // ── Crops ──────────────────────────────────────────────────
    let crop_routes = Router::new()
        .route(
            "/farms/{id}/crops",
            post(crops::create_crop).get(crops::list_crops_by_farm),
        )
        .route(
            "/crops",
            restricted(get(crops::list_crops), &auth_state, MANAGERS),
        )
        .route(
            "/crops/{id}",
            get(crops::get_crop).merge(restricted(
                put(crops::update_crop).delete(crops::delete_crop),
                &auth_state,
                MANAGERS,
            )),
        )
        .route("/crops/{id}/fertilizers", get(crops::list_crop_fertilizers))
        .route(
            "/crops/{id}/fertilizers/{fertilizer_id}",
            post(crops::add_fertilizer_to_crop),
        )
        .with_state(crops::CropHandlerState {
            service: Arc::new(CropService::new(ctx.repos.clone())),
        });

    // ── Fertilizers ────────────────────────────────────────────
    let fertilizer_routes = Router::new()
        .route(
            "/fertilizers",
            post(fertilizers::create_fertilizer).merge(restricted(
                get(fertilizers::list_fertilizers),
                &auth_state,
                ADMINS,
            )),
        )
        .route(
            "/fertilizers/{id}",
            get(fertilizers::get_fertilizer).merge(restricted(
                put(fertilizers::update_fertilizer).delete(fertilizers::delete_fertilizer),
                &auth_state,
                ADMINS,
            )),
        )
        .with_state(fertilizers::FertilizerHandlerState {
            service: Arc::new(FertilizerService::new(ctx.repos.clone())),
        });

    // ── Health / metrics ───────────────────────────────────────
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: ctx.db.clone(),
            started_at: Arc::new(Instant::now()),
        });

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .merge(auth_routes)
        .merge(person_routes)
        .merge(farm_routes)
        .merge(crop_routes)
        .merge(fertilizer_routes);

    if let Some(handle) = ctx.prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
