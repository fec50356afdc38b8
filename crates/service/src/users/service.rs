use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{RegisterInput, User};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User registration and credential checks
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::users::{UserService, domain::RegisterInput, repository::mock::MockUserRepository};
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = RegisterInput { username: "dicoding".into(), password: "secret".into(), fullname: "Dicoding Indonesia".into() };
    /// let id = tokio_test::block_on(svc.add_user(input)).unwrap();
    /// assert!(id.starts_with("user-"));
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn add_user(&self, input: RegisterInput) -> Result<String, ServiceError> {
        models::user::validate_username(&input.username)?;
        models::validation::require_non_empty("password", &input.password)?;
        models::validation::require_non_empty("fullname", &input.fullname)?;
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!("user exists: {}", existing.user.username);
            return Err(ServiceError::Conflict("Failed to add user. Username already used.".into()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| ServiceError::Internal(e.to_string()))?
            .to_string();

        let user = self.repo.create(&input.username, &hash, &input.fullname).await?;
        info!(user_id = %user.id, username = %user.username, "user_registered");
        Ok(user.id)
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<User, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("User not found"))
    }

    /// Returns the user id when the password matches.
    #[instrument(skip(self, password))]
    pub async fn verify_user_credential(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        let invalid = || ServiceError::Authentication("Invalid credentials".into());
        let stored = self.repo.find_by_username(username).await?.ok_or_else(invalid)?;

        let parsed = PasswordHash::new(&stored.password_hash).map_err(|_| invalid())?;
        if Argon2::default().verify_password(password.as_bytes(), &parsed).is_err() {
            return Err(invalid());
        }
        Ok(stored.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repository::mock::MockUserRepository;

    fn input(username: &str) -> RegisterInput {
        RegisterInput { username: username.into(), password: "s3cret".into(), fullname: "Chris Martin".into() }
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        svc.add_user(input("chris")).await.unwrap();
        let err = svc.add_user(input("chris")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "Failed to add user. Username already used.");
    }

    #[tokio::test]
    async fn credentials_are_checked_against_the_hash() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let id = svc.add_user(input("jonny")).await.unwrap();
        assert_eq!(svc.verify_user_credential("jonny", "s3cret").await.unwrap(), id);
        assert!(matches!(svc.verify_user_credential("jonny", "wrong").await, Err(ServiceError::Authentication(_))));
        assert!(matches!(svc.verify_user_credential("nobody", "s3cret").await, Err(ServiceError::Authentication(_))));
        assert_eq!(svc.get_user_by_id(&id).await.unwrap().username, "jonny");
    }

    #[tokio::test]
    async fn blank_fields_fail_validation() {
        let svc = UserService::new(Arc::new(MockUserRepository::default()));
        let err = svc.add_user(RegisterInput { username: "guy".into(), password: "".into(), fullname: "Guy".into() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
