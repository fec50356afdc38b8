use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{LoginInput, TokenPair};
use super::repository::AuthenticationRepository;
use super::token::TokenManager;
use crate::errors::ServiceError;
use crate::users::UserService;

/// Auth business service independent of web framework
pub struct AuthService {
    repo: Arc<dyn AuthenticationRepository>,
    users: Arc<UserService>,
    tokens: Arc<TokenManager>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthenticationRepository>, users: Arc<UserService>, tokens: Arc<TokenManager>) -> Self {
        Self { repo, users, tokens }
    }

    /// Authenticate a user and issue an access/refresh pair.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, TokenManager, domain::LoginInput, repository::mock::MockAuthenticationRepository};
    /// use service::users::{UserService, domain::RegisterInput, repository::mock::MockUserRepository};
    /// let users = Arc::new(UserService::new(Arc::new(MockUserRepository::default())));
    /// let cfg = configs::AuthConfig { access_token_key: "a".into(), refresh_token_key: "r".into(), access_token_age_secs: 60, refresh_token_age_secs: 120 };
    /// let svc = AuthService::new(Arc::new(MockAuthenticationRepository::default()), users.clone(), Arc::new(TokenManager::new(&cfg)));
    /// let _ = tokio_test::block_on(users.add_user(RegisterInput { username: "u".into(), password: "p".into(), fullname: "U".into() }));
    /// let pair = tokio_test::block_on(svc.login(LoginInput { username: "u".into(), password: "p".into() })).unwrap();
    /// assert!(!pair.refresh_token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<TokenPair, ServiceError> {
        let user_id = self.users.verify_user_credential(&input.username, &input.password).await?;
        let access_token = self.tokens.generate_access_token(&user_id)?;
        let refresh_token = self.tokens.generate_refresh_token(&user_id)?;
        self.repo.add_refresh_token(&refresh_token).await?;
        info!(user_id = %user_id, "user_logged_in");
        Ok(TokenPair { access_token, refresh_token })
    }

    /// Issue a new access token for a stored, valid refresh token.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, ServiceError> {
        if !self.repo.refresh_token_exists(refresh_token).await? {
            warn!("refresh_token_unknown");
            return Err(ServiceError::Invariant("Invalid refresh token".into()));
        }
        let claims = self.tokens.verify_refresh_token(refresh_token)?;
        let access_token = self.tokens.generate_access_token(&claims.id)?;
        info!(user_id = %claims.id, "access_token_refreshed");
        Ok(access_token)
    }

    #[instrument(skip_all)]
    pub async fn logout(&self, refresh_token: &str) -> Result<(), ServiceError> {
        if !self.repo.delete_refresh_token(refresh_token).await? {
            return Err(ServiceError::Invariant("Refresh token not found".into()));
        }
        info!("refresh_token_revoked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::LoginInput;
    use crate::auth::repository::mock::MockAuthenticationRepository;
    use crate::users::domain::RegisterInput;
    use crate::users::repository::mock::MockUserRepository;

    async fn service() -> AuthService {
        let users = Arc::new(UserService::new(Arc::new(MockUserRepository::default())));
        users.add_user(RegisterInput { username: "chris".into(), password: "yellow".into(), fullname: "Chris".into() }).await.unwrap();
        let tokens = Arc::new(TokenManager::new(&configs::AuthConfig {
            access_token_key: "access".into(),
            refresh_token_key: "refresh".into(),
            access_token_age_secs: 1800,
            refresh_token_age_secs: 3600,
        }));
        AuthService::new(Arc::new(MockAuthenticationRepository::default()), users, tokens)
    }

    fn login(password: &str) -> LoginInput {
        LoginInput { username: "chris".into(), password: password.into() }
    }

    #[tokio::test]
    async fn login_refresh_logout() {
        let svc = service().await;
        let pair = svc.login(login("yellow")).await.unwrap();
        assert!(svc.tokens.verify_access_token(&pair.access_token).is_ok());

        let access = svc.refresh(&pair.refresh_token).await.unwrap();
        assert!(svc.tokens.verify_access_token(&access).is_ok());

        svc.logout(&pair.refresh_token).await.unwrap();
        let err = svc.refresh(&pair.refresh_token).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid refresh token");
        assert!(matches!(svc.logout(&pair.refresh_token).await, Err(ServiceError::Invariant(_))));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthenticated() {
        let svc = service().await;
        assert!(matches!(svc.login(login("blue")).await, Err(ServiceError::Authentication(_))));
    }

    #[tokio::test]
    async fn unsigned_refresh_token_is_rejected_even_if_stored() {
        let svc = service().await;
        svc.repo.add_refresh_token("forged").await.unwrap();
        assert!(matches!(svc.refresh("forged").await, Err(ServiceError::Invariant(_))));
    }
}
