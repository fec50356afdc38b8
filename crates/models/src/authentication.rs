use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Issued refresh tokens. A token is valid for refresh only while its row exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authentications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub token: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert<C: ConnectionTrait>(db: &C, token: &str) -> Result<(), errors::ModelError> {
    let am = ActiveModel { token: Set(token.to_string()), created_at: Set(Utc::now().into()) };
    am.insert(db).await?;
    Ok(())
}

pub async fn exists<C: ConnectionTrait>(db: &C, token: &str) -> Result<bool, errors::ModelError> {
    Ok(Entity::find_by_id(token.to_string()).one(db).await?.is_some())
}

/// Returns whether a row was removed.
pub async fn remove<C: ConnectionTrait>(db: &C, token: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(token.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
}
