use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{album, errors, ids, user};

/// One row per (album, user); the pair is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_album_likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub album_id: String,
    pub user_id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Album, User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Album => Entity::belongs_to(album::Entity)
                .from(Column::AlbumId)
                .to(album::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find<C: ConnectionTrait>(db: &C, album_id: &str, user_id: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::AlbumId.eq(album_id))
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, album_id: &str, user_id: &str) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(ids::new_id("like")),
        album_id: Set(album_id.to_string()),
        user_id: Set(user_id.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Returns whether a row was removed.
pub async fn remove<C: ConnectionTrait>(db: &C, album_id: &str, user_id: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::AlbumId.eq(album_id))
        .filter(Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}

pub async fn count_for_album<C: ConnectionTrait>(db: &C, album_id: &str) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().filter(Column::AlbumId.eq(album_id)).count(db).await?)
}
