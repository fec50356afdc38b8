use sea_orm::DatabaseConnection;

use crate::auth::repository::AuthenticationRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAuthenticationRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthenticationRepository for SeaOrmAuthenticationRepository {
    async fn add_refresh_token(&self, token: &str) -> Result<(), ServiceError> {
        Ok(models::authentication::insert(&self.db, token).await?)
    }

    async fn refresh_token_exists(&self, token: &str) -> Result<bool, ServiceError> {
        Ok(models::authentication::exists(&self.db, token).await?)
    }

    async fn delete_refresh_token(&self, token: &str) -> Result<bool, ServiceError> {
        Ok(models::authentication::remove(&self.db, token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn refresh_tokens_persist_until_deleted() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmAuthenticationRepository { db };
        let token = models::ids::new_id("token");
        repo.add_refresh_token(&token).await.unwrap();
        assert!(repo.refresh_token_exists(&token).await.unwrap());
        assert!(repo.delete_refresh_token(&token).await.unwrap());
        assert!(!repo.refresh_token_exists(&token).await.unwrap());
    }
}
