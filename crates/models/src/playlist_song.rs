use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, ids, playlist, song};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "playlist_songs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub playlist_id: String,
    pub song_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Playlist, Song }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Playlist => Entity::belongs_to(playlist::Entity)
                .from(Column::PlaylistId)
                .to(playlist::Column::Id)
                .into(),
            Relation::Song => Entity::belongs_to(song::Entity)
                .from(Column::SongId)
                .to(song::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, playlist_id: &str, song_id: &str) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id("playlist-song")),
        playlist_id: Set(playlist_id.to_string()),
        song_id: Set(song_id.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
