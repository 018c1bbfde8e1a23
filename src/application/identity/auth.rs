//! Login and token validation

use std::sync::Arc;

use tracing::{info, warn};

use super::with_hasher;
use crate::domain::person::{PasswordHasher, Person};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, verify_token, JwtConfig, TokenClaims};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    /// Seconds
    pub expires_in: i64,
    pub person: Person,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    hasher: Arc<dyn PasswordHasher>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        hasher: Arc<dyn PasswordHasher>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            repos,
            hasher,
            jwt_config,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Verify credentials and issue a JWT. Unknown users and wrong
    /// passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let invalid = || DomainError::Unauthorized("invalid credentials".into());

        let Some(person) = self.repos.persons().find_by_username(username).await? else {
            warn!(username, "Login failed: unknown username");
            return Err(invalid());
        };

        let plain = password.to_string();
        let checked = with_hasher(&self.hasher, move |h| {
            let verdict = person.authenticate(&plain, h);
            Ok((person, verdict))
        })
        .await?;
        let person = match checked {
            (person, Ok(())) => person,
            (_, Err(_)) => {
                warn!(username, "Login failed: wrong password");
                return Err(invalid());
            }
        };

        let token = create_token(
            person.id(),
            person.username(),
            person.role().as_str(),
            &self.jwt_config,
        )
        .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;

        info!(person_id = person.id(), username, "Person logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            person,
        })
    }

    /// Decode a token without touching storage.
    pub fn decode(&self, token: &str) -> DomainResult<TokenClaims> {
        verify_token(token, &self.jwt_config)
            .map_err(|e| DomainError::Unauthorized(format!("invalid token: {}", e)))
    }

    /// Resolve a token to the person it names.
    pub async fn validate_token(&self, token: &str) -> DomainResult<Person> {
        let claims = self.decode(token)?;
        let id = claims
            .person_id()
            .ok_or_else(|| DomainError::Unauthorized("invalid token subject".into()))?;
        self.repos
            .persons()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Person", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Role;
    use crate::infrastructure::crypto::password::BcryptPasswordHasher;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    async fn setup() -> (AuthService, Person) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let hasher = Arc::new(BcryptPasswordHasher::new(4));
        let person = repos
            .persons()
            .save(Person::new("manager", "password1", Role::Manager, hasher.as_ref()).unwrap())
            .await
            .unwrap();
        let svc = AuthService::new(
            repos,
            hasher,
            JwtConfig {
                secret: "test".into(),
                expiration_hours: 2,
                issuer: "cropflow".into(),
            },
        );
        (svc, person)
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let (svc, person) = setup().await;
        let result = svc.login("manager", "password1").await.unwrap();
        assert_eq!(result.token_type, "Bearer");
        assert_eq!(result.expires_in, 7200);

        let claims = svc.decode(&result.token).unwrap();
        assert_eq!(claims.role, "MANAGER");
        assert_eq!(claims.person_id(), Some(person.id()));

        let resolved = svc.validate_token(&result.token).await.unwrap();
        assert_eq!(resolved.username(), "manager");
    }

    #[tokio::test]
    async fn test_login_failures_look_the_same() {
        let (svc, _) = setup().await;
        let wrong_pass = svc.login("manager", "password2").await.unwrap_err();
        let unknown = svc.login("nobody", "password1").await.unwrap_err();
        assert_eq!(wrong_pass.to_string(), unknown.to_string());
        assert!(matches!(unknown, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_login_with_padded_username() {
        let (svc, _) = setup().await;
        svc.repos
            .persons()
            .save(
                Person::new("  alice  ", "password1", Role::User, &BcryptPasswordHasher::new(4))
                    .unwrap(),
            )
            .await
            .unwrap();
        let result = svc.login("  alice  ", "password1").await.unwrap();
        assert_eq!(result.person.username(), "  alice  ");
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let (svc, _) = setup().await;
        assert!(matches!(
            svc.validate_token("not.a.jwt").await.unwrap_err(),
            DomainError::Unauthorized(_)
        ));
    }
}
