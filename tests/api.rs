//! End-to-end tests: full router over an in-memory SQLite database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use cropflow::application::PersonService;
use cropflow::domain::person::Role;
use cropflow::infrastructure::crypto::jwt::JwtConfig;
use cropflow::infrastructure::crypto::password::BcryptPasswordHasher;
use cropflow::infrastructure::database::migrator::Migrator;
use cropflow::{create_api_router, init_database, ApiContext, DatabaseConfig, SeaOrmRepositoryProvider};

const ADMIN: (&str, &str) = ("admin", "admin12345");

async fn app() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new(4));

    PersonService::new(repos.clone(), hasher.clone())
        .create_person(ADMIN.0, ADMIN.1, Role::Admin)
        .await
        .unwrap();

    create_api_router(ApiContext {
        repos,
        hasher,
        jwt_config: JwtConfig {
            secret: "integration-secret".into(),
            ..Default::default()
        },
        db,
        prometheus: None,
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", t));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["data"]["token"].as_str().unwrap().to_string()
}

/// Register through the public endpoint and log in.
async fn register(app: &Router, username: &str, role: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": username, "password": "password123", "role": role})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    let id = body["data"]["id"].as_i64().unwrap();
    (id, login(app, username, "password123").await)
}

async fn create_farm(app: &Router, name: &str, size: f64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/farms",
        None,
        Some(json!({"name": name, "size": size})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

async fn create_fertilizer(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/fertilizers",
        None,
        Some(json!({"name": name, "brand": "Yara", "composition": "NPK 10-10-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

// ── Auth & persons ─────────────────────────────────────────────

#[tokio::test]
async fn login_and_me() {
    let app = app().await;
    let token = login(&app, ADMIN.0, ADMIN.1).await;

    let (status, body) = send(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "admin");
    assert_eq!(body["data"]["role"], "ADMIN");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn login_response_shape() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": ADMIN.0, "password": ADMIN.1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tokenType"], "Bearer");
    assert_eq!(body["data"]["expiresIn"], 24 * 3600);
    assert_eq!(body["data"]["person"]["username"], "admin");
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = app().await;
    let (wrong_pw, a) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": "admin", "password": "nope-nope"})),
    )
    .await;
    let (unknown, b) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"username": "ghost", "password": "nope-nope"})),
    )
    .await;
    assert_eq!(wrong_pw, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(a["error"], b["error"]);
}

#[tokio::test]
async fn me_requires_token() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, Method::GET, "/auth/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn person_registration_rules() {
    let app = app().await;
    register(&app, "maria", "USER").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": "maria", "password": "password123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": "pedro", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": "pe", "password": "password123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": "pedro", "password": "password123", "role": "OWNER"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/persons",
        None,
        Some(json!({"username": "pedro", "password": "password123", "role": "ROLE_MANAGER"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], "MANAGER");
}

#[tokio::test]
async fn person_administration_is_admin_only() {
    let app = app().await;
    let admin = login(&app, ADMIN.0, ADMIN.1).await;
    let (ana_id, ana) = register(&app, "ana", "USER").await;

    let (status, _) = send(&app, Method::GET, "/persons", Some(&ana), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::GET, "/persons", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let uri = format!("/persons/{}/role", ana_id);
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({"role": "MANAGER"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "MANAGER");

    // same role again
    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({"role": "MANAGER"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/persons/{}", ana_id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn password_change_rules() {
    let app = app().await;
    let admin = login(&app, ADMIN.0, ADMIN.1).await;
    let (bia_id, bia) = register(&app, "bia", "USER").await;
    let (caio_id, _) = register(&app, "caio", "USER").await;

    let own = format!("/persons/{}/password", bia_id);

    // own password needs the current one
    let (status, _) = send(
        &app,
        Method::PUT,
        &own,
        Some(&bia),
        Some(json!({"newPassword": "brandnew123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        &own,
        Some(&bia),
        Some(json!({"currentPassword": "wrongwrong", "newPassword": "brandnew123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::PUT,
        &own,
        Some(&bia),
        Some(json!({"currentPassword": "password123", "newPassword": "brandnew123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    login(&app, "bia", "brandnew123").await;

    // someone else's password
    let other = format!("/persons/{}/password", caio_id);
    let (status, _) = send(
        &app,
        Method::PUT,
        &other,
        Some(&bia),
        Some(json!({"newPassword": "hijacked123"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::PUT,
        &other,
        Some(&admin),
        Some(json!({"newPassword": "resetbyadmin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    login(&app, "caio", "resetbyadmin").await;
}

// ── Farms ──────────────────────────────────────────────────────

#[tokio::test]
async fn farm_crud_and_access() {
    let app = app().await;
    let (_, user) = register(&app, "user1", "USER").await;
    let (_, manager) = register(&app, "manager1", "MANAGER").await;

    let id = create_farm(&app, "Boa Vista", 120.5).await;

    let (status, body) = send(&app, Method::GET, &format!("/farms/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Boa Vista");
    assert_eq!(body["data"]["size"], 120.5);

    let (status, _) = send(&app, Method::GET, "/farms", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, body) = send(&app, Method::GET, "/farms", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/farms/{}", id);
    let update = json!({"name": "Boa Vista II", "size": 200.0});
    let (status, _) = send(&app, Method::PUT, &uri, Some(&user), Some(update.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(&app, Method::PUT, &uri, Some(&manager), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Boa Vista II");
    assert_eq!(body["data"]["size"], 200.0);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn farm_input_errors() {
    let app = app().await;

    let (status, _) = send(&app, Method::GET, "/farms/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/farms/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/farms",
        None,
        Some(json!({"name": "Zero", "size": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/farms",
        None,
        Some(json!({"name": "", "size": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/farms")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Crops ──────────────────────────────────────────────────────

#[tokio::test]
async fn crops_on_a_farm() {
    let app = app().await;
    let (_, user) = register(&app, "user2", "USER").await;
    let (_, manager) = register(&app, "manager2", "MANAGER").await;
    let farm = create_farm(&app, "Santa Rita", 50.0).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/farms/999/crops",
        None,
        Some(json!({"name": "Soja", "plantedArea": 10.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/farms/{}/crops", farm),
        None,
        Some(json!({
            "name": "Milho",
            "plantedArea": 5.0,
            "plantedDate": "2025-06-01",
            "harvestDate": "2025-03-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/farms/{}/crops", farm),
        None,
        Some(json!({
            "name": "Soja",
            "plantedArea": 20.0,
            "plantedDate": "2025-03-01",
            "harvestDate": "2025-07-15"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["farmId"].as_i64(), Some(farm));
    assert_eq!(body["data"]["plantedDate"], "2025-03-01");
    let crop = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/farms/{}/crops", farm), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/crops", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(&app, Method::GET, "/crops", Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/crops/{}", crop);
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&manager),
        Some(json!({"plantedArea": 25.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["plantedArea"], 25.5);
    assert_eq!(body["data"]["name"], "Soja");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&user),
        Some(json!({"plantedArea": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        None,
        Some(json!({"plantedArea": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/farms/{}/crops", farm),
        None,
        Some(json!({"name": "Trigo", "plantedArea": 3.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let short_lived = format!("/crops/{}", body["data"]["id"].as_i64().unwrap());
    let (status, body) = send(&app, Method::DELETE, &short_lived, Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
    let (status, _) = send(&app, Method::GET, &short_lived, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["plantedArea"], 25.5);

    // deleting the farm takes its crops with it
    let (status, _) = send(&app, Method::DELETE, &format!("/farms/{}", farm), Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fertilizers_applied_to_crops() {
    let app = app().await;
    let farm = create_farm(&app, "Esperanca", 80.0).await;
    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/farms/{}/crops", farm),
        None,
        Some(json!({"name": "Cafe", "plantedArea": 8.0})),
    )
    .await;
    let crop = body["data"]["id"].as_i64().unwrap();
    let urea = create_fertilizer(&app, "Ureia").await;

    let link = format!("/crops/{}/fertilizers/{}", crop, urea);
    let (status, body) = send(&app, Method::POST, &link, None, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["cropId"].as_i64(), Some(crop));
    assert_eq!(body["data"]["fertilizerId"].as_i64(), Some(urea));

    let (status, _) = send(&app, Method::POST, &link, None, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/crops/{}/fertilizers/999", crop),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/crops/999/fertilizers/{}", urea),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/crops/{}/fertilizers", crop),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Ureia");

    let (status, _) = send(&app, Method::GET, "/crops/999/fertilizers", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Fertilizers ────────────────────────────────────────────────

#[tokio::test]
async fn fertilizer_catalogue_is_admin_managed() {
    let app = app().await;
    let admin = login(&app, ADMIN.0, ADMIN.1).await;
    let (_, manager) = register(&app, "manager3", "MANAGER").await;
    let id = create_fertilizer(&app, "Superfosfato").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/fertilizers",
        None,
        Some(json!({"name": "X", "brand": "", "composition": "P"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/fertilizers", Some(&manager), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(&app, Method::GET, "/fertilizers", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/fertilizers/{}", id);
    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], "Yara");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&manager),
        Some(json!({"brand": "Mosaic"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({"brand": "Mosaic"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], "Mosaic");
    assert_eq!(body["data"]["name"], "Superfosfato");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Cross-cutting ──────────────────────────────────────────────

#[tokio::test]
async fn health_and_request_id() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-request-id"], "trace-me");

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api-doc/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "CropFlow API");
    assert!(body["paths"]["/farms/{id}/crops"].is_object());
}
