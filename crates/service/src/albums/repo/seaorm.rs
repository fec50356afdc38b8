use sea_orm::{DatabaseConnection, EntityTrait};

use crate::albums::domain::{Album, AlbumInput};
use crate::albums::repository::AlbumRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAlbumRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AlbumRepository for SeaOrmAlbumRepository {
    async fn create(&self, input: &AlbumInput) -> Result<Album, ServiceError> {
        let created = models::album::create(&self.db, &input.name, input.year).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, ServiceError> {
        let found = models::album::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(found.map(Album::from))
    }

    async fn update(&self, id: &str, input: &AlbumInput) -> Result<Option<Album>, ServiceError> {
        let updated = models::album::update(&self.db, id, &input.name, input.year).await?;
        Ok(updated.map(Album::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let res = models::album::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn set_cover(&self, id: &str, cover_url: &str) -> Result<Option<Album>, ServiceError> {
        let updated = models::album::set_cover(&self.db, id, cover_url).await?;
        Ok(updated.map(Album::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn album_crud_against_postgres() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmAlbumRepository { db };
        let created = repo.create(&AlbumInput { name: "Parachutes".into(), year: 2000 }).await.unwrap();
        assert!(repo.exists(&created.id).await.unwrap());

        let updated = repo.update(&created.id, &AlbumInput { name: "X&Y".into(), year: 2005 }).await.unwrap().unwrap();
        assert_eq!(updated.name, "X&Y");

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(repo.update(&created.id, &AlbumInput { name: "gone".into(), year: 2005 }).await.unwrap().is_none());
    }
}
