//! Identity module: person management & authentication

pub mod auth;
pub mod service;

use std::sync::Arc;

use crate::domain::person::{PasswordHasher, PersonError};
use crate::domain::{DomainError, DomainResult};

pub use auth::{AuthResult, AuthService};
pub use service::PersonService;

/// Run bcrypt work on the blocking pool.
async fn with_hasher<T, F>(hasher: &Arc<dyn PasswordHasher>, work: F) -> DomainResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn PasswordHasher) -> Result<T, PersonError> + Send + 'static,
{
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || work(hasher.as_ref()))
        .await
        .map_err(|e| DomainError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(DomainError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::password::BcryptPasswordHasher;

    #[tokio::test]
    async fn test_with_hasher_runs_off_the_runtime() {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::new(4));
        let hashed = with_hasher(&hasher, |h| h.hash("password1")).await.unwrap();
        let matches = with_hasher(&hasher, move |h| h.verify("password1", &hashed))
            .await
            .unwrap();
        assert!(matches);
    }

    #[tokio::test]
    async fn test_with_hasher_maps_person_errors() {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::new(4));
        let err = with_hasher(&hasher, |_| -> Result<(), PersonError> {
            Err(PersonError::InvalidCredentials)
        })
        .await
        .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
