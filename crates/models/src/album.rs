use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, ids, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub year: i32,
    pub cover: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(name: &str, year: i32) -> Result<(), errors::ModelError> {
    validation::require_non_empty("name", name)?;
    validation::validate_year(year)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, year: i32) -> Result<Model, errors::ModelError> {
    validate(name, year)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id("album")),
        name: Set(name.to_string()),
        year: Set(year),
        cover: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Update name/year; `Ok(None)` when the album does not exist.
pub async fn update<C: ConnectionTrait>(db: &C, id: &str, name: &str, year: i32) -> Result<Option<Model>, errors::ModelError> {
    validate(name, year)?;
    let Some(found) = Entity::find_by_id(id.to_string()).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    am.year = Set(year);
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}

pub async fn set_cover<C: ConnectionTrait>(db: &C, id: &str, cover_url: &str) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id.to_string()).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.cover = Set(Some(cover_url.to_string()));
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}
