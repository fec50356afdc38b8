use async_trait::async_trait;

use super::domain::{StoredUser, User};
use crate::errors::ServiceError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, username: &str, password_hash: &str, fullname: &str) -> Result<User, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, StoredUser>>, // key: user id
    }

    impl MockUserRepository {
        /// Insert a user with a fixed id and an unusable password hash.
        pub fn seed(&self, id: &str, username: &str) -> User {
            let user = User { id: id.to_string(), username: username.to_string(), fullname: username.to_string() };
            self.users.lock().unwrap().insert(id.to_string(), StoredUser { user: user.clone(), password_hash: String::new() });
            user
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, username: &str, password_hash: &str, fullname: &str) -> Result<User, ServiceError> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.user.username == username) {
                return Err(ServiceError::Db("duplicate key value violates unique constraint".into()));
            }
            let user = User { id: models::ids::new_id("user"), username: username.to_string(), fullname: fullname.to_string() };
            users.insert(user.id.clone(), StoredUser { user: user.clone(), password_hash: password_hash.to_string() });
            Ok(user)
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.users.lock().unwrap().get(id).map(|u| u.user.clone()))
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, ServiceError> {
            Ok(self.users.lock().unwrap().values().find(|u| u.user.username == username).cloned())
        }
    }
}
