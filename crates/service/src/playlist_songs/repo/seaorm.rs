use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;
use crate::playlist_songs::repository::PlaylistSongRepository;
use models::playlist_song::{Column, Entity};

pub struct SeaOrmPlaylistSongRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl PlaylistSongRepository for SeaOrmPlaylistSongRepository {
    async fn add(&self, playlist_id: &str, song_id: &str) -> Result<String, ServiceError> {
        Ok(models::playlist_song::create(&self.db, playlist_id, song_id).await?.id)
    }

    async fn song_ids(&self, playlist_id: &str) -> Result<Vec<String>, ServiceError> {
        let rows = Entity::find()
            .filter(Column::PlaylistId.eq(playlist_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|r| r.song_id).collect())
    }

    async fn remove(&self, playlist_id: &str, song_id: &str) -> Result<bool, ServiceError> {
        let res = Entity::delete_many()
            .filter(Column::PlaylistId.eq(playlist_id))
            .filter(Column::SongId.eq(song_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
