use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

/// Domain user (business view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// User row including the argon2 PHC hash; never serialized.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

impl From<models::user::Model> for StoredUser {
    fn from(m: models::user::Model) -> Self {
        Self {
            user: User { id: m.id, username: m.username, fullname: m.fullname },
            password_hash: m.password,
        }
    }
}
