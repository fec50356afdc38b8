use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{album, errors, ids, validation};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Album }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Album => Entity::belongs_to(album::Entity)
                .from(Column::AlbumId)
                .to(album::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values shared by create and update.
#[derive(Clone, Debug)]
pub struct SongFields {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

pub fn validate(fields: &SongFields) -> Result<(), errors::ModelError> {
    validation::require_non_empty("title", &fields.title)?;
    validation::require_non_empty("genre", &fields.genre)?;
    validation::require_non_empty("performer", &fields.performer)?;
    validation::validate_year(fields.year)?;
    validation::validate_duration(fields.duration)
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: SongFields) -> Result<Model, errors::ModelError> {
    validate(&fields)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id("song")),
        title: Set(fields.title),
        year: Set(fields.year),
        genre: Set(fields.genre),
        performer: Set(fields.performer),
        duration: Set(fields.duration),
        album_id: Set(fields.album_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, id: &str, fields: SongFields) -> Result<Option<Model>, errors::ModelError> {
    validate(&fields)?;
    let Some(found) = Entity::find_by_id(id.to_string()).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.title = Set(fields.title);
    am.year = Set(fields.year);
    am.genre = Set(fields.genre);
    am.performer = Set(fields.performer);
    am.duration = Set(fields.duration);
    am.album_id = Set(fields.album_id);
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}
