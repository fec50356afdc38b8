use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;
use crate::playlists::domain::Playlist;
use crate::playlists::repository::PlaylistRepository;
use models::playlist::{Column, Entity};

pub struct SeaOrmPlaylistRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl PlaylistRepository for SeaOrmPlaylistRepository {
    async fn create(&self, name: &str, owner: &str) -> Result<Playlist, ServiceError> {
        Ok(models::playlist::create(&self.db, name, owner).await?.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Playlist>, ServiceError> {
        Ok(Entity::find_by_id(id.to_string()).one(&self.db).await?.map(Playlist::from))
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Playlist>, ServiceError> {
        let rows = Entity::find()
            .filter(Column::Owner.eq(owner))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let res = Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
