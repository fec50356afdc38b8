use async_trait::async_trait;

use crate::errors::ServiceError;

/// Persistence for issued refresh tokens.
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_refresh_token(&self, token: &str) -> Result<(), ServiceError>;
    async fn refresh_token_exists(&self, token: &str) -> Result<bool, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete_refresh_token(&self, token: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthenticationRepository {
        tokens: Mutex<HashSet<String>>,
    }

    #[async_trait]
    impl AuthenticationRepository for MockAuthenticationRepository {
        async fn add_refresh_token(&self, token: &str) -> Result<(), ServiceError> {
            self.tokens.lock().unwrap().insert(token.to_string());
            Ok(())
        }

        async fn refresh_token_exists(&self, token: &str) -> Result<bool, ServiceError> {
            Ok(self.tokens.lock().unwrap().contains(token))
        }

        async fn delete_refresh_token(&self, token: &str) -> Result<bool, ServiceError> {
            Ok(self.tokens.lock().unwrap().remove(token))
        }
    }
}
