use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, ids, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    /// argon2 PHC string
    #[serde(skip_serializing)]
    pub password: String,
    pub fullname: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    validation::require_non_empty("username", username)?;
    if username.len() > 50 {
        return Err(errors::ModelError::Validation("\"username\" length must be less than or equal to 50 characters long".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, username: &str, password_hash: &str, fullname: &str) -> Result<Model, errors::ModelError> {
    validate_username(username)?;
    validation::require_non_empty("fullname", fullname)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id("user")),
        username: Set(username.to_string()),
        password: Set(password_hash.to_string()),
        fullname: Set(fullname.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Username.eq(username)).one(db).await?)
}
