use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;
use crate::users::domain::{StoredUser, User};
use crate::users::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, username: &str, password_hash: &str, fullname: &str) -> Result<User, ServiceError> {
        let created = models::user::create(&self.db, username, password_hash, fullname).await?;
        Ok(StoredUser::from(created).user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ServiceError> {
        let found = models::user::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(found.map(|m| StoredUser::from(m).user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, ServiceError> {
        Ok(models::user::find_by_username(&self.db, username).await?.map(StoredUser::from))
    }
}
