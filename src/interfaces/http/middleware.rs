//! Authentication and role-guard middleware for Axum

use std::str::FromStr;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::domain::Role;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    InsufficientPermissions,
}

/// Authentication state containing the JWT config
#[derive(Clone, Debug)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Caller identity decoded from a bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub person_id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Option<Self> {
        Some(Self {
            person_id: claims.person_id()?,
            role: Role::from_str(&claims.role).ok()?,
            username: claims.username,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// State for [`role_guard_middleware`]: token check plus the roles let through
#[derive(Clone, Debug)]
pub struct RoleGuard {
    pub auth: AuthState,
    pub allowed: &'static [Role],
}

impl RoleGuard {
    pub fn new(auth: AuthState, allowed: &'static [Role]) -> Self {
        Self { auth, allowed }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn authenticate(request: &Request<Body>, auth: &AuthState) -> Result<AuthenticatedUser, AuthError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_token(auth_header).ok_or(AuthError::InvalidToken)?;

    let claims = verify_token(token, &auth.jwt_config).map_err(|e| {
        debug!(error = %e, "Rejected bearer token");
        AuthError::InvalidToken
    })?;

    AuthenticatedUser::from_claims(claims).ok_or(AuthError::InvalidToken)
}

/// JWT authentication middleware
///
/// Inserts [`AuthenticatedUser`] into the request extensions.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&request, &auth_state) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => auth_error_response(e),
    }
}

/// Authenticate, then require the caller's role to be one of `guard.allowed`
pub async fn role_guard_middleware(
    State(guard): State<RoleGuard>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let user = match authenticate(&request, &guard.auth) {
        Ok(user) => user,
        Err(e) => return auth_error_response(e),
    };

    if !guard.allowed.contains(&user.role) {
        debug!(
            username = %user.username,
            role = %user.role,
            path = %request.uri().path(),
            "Role not permitted"
        );
        return auth_error_response(AuthError::InsufficientPermissions);
    }

    request.extensions_mut().insert(user);
    next.run(request).await
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "Insufficient permissions"),
    };

    let body = Json(json!({
        "success": false,
        "data": null,
        "error": message
    }));

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;
    use axum::{middleware, routing::get, Extension, Router};
    use tower::Service;

    fn auth() -> AuthState {
        AuthState {
            jwt_config: JwtConfig {
                secret: "middleware-test".into(),
                ..Default::default()
            },
        }
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.person_id, user.role)
    }

    fn app(allowed: &'static [Role]) -> Router {
        Router::new()
            .route("/guarded", get(whoami))
            .layer(middleware::from_fn_with_state(
                RoleGuard::new(auth(), allowed),
                role_guard_middleware,
            ))
    }

    async fn call(app: Router, token: Option<String>) -> Response {
        let mut builder = Request::builder().uri("/guarded");
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, t);
        }
        let mut svc = app.into_service();
        svc.call(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    fn bearer(role: Role) -> String {
        let token = create_token(7, "tester", role.as_str(), &auth().jwt_config).unwrap();
        format!("Bearer {}", token)
    }

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Bearer "), None);
        assert_eq!(extract_token("Basic abc"), None);
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let resp = call(app(&[Role::Admin]), None).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_401() {
        let resp = call(app(&[Role::Admin]), Some("Bearer nope".into())).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_role_is_403() {
        let resp = call(app(&[Role::Admin]), Some(bearer(Role::User))).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_allowed_role_passes_identity_through() {
        let resp = call(
            app(&[Role::Manager, Role::Admin]),
            Some(bearer(Role::Manager)),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"7:MANAGER");
    }
}
