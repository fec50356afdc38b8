use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Album, AlbumInput, AlbumView};
use super::repository::AlbumRepository;
use crate::errors::ServiceError;
use crate::songs::repository::SongRepository;

/// Album business service independent of web framework
pub struct AlbumService {
    repo: Arc<dyn AlbumRepository>,
    songs: Arc<dyn SongRepository>,
}

impl AlbumService {
    pub fn new(repo: Arc<dyn AlbumRepository>, songs: Arc<dyn SongRepository>) -> Self { Self { repo, songs } }

    #[instrument(skip(self, input), fields(name = %input.name, year = input.year))]
    pub async fn add_album(&self, input: AlbumInput) -> Result<String, ServiceError> {
        models::album::validate(&input.name, input.year)?;
        let album = self.repo.create(&input).await?;
        info!(album_id = %album.id, "album_created");
        Ok(album.id)
    }

    #[instrument(skip(self))]
    pub async fn get_album_by_id(&self, id: &str) -> Result<AlbumView, ServiceError> {
        let album = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Album not found"))?;
        let songs = self.songs.find_by_album(id).await?.into_iter().map(Into::into).collect();
        Ok(AlbumView { album, songs })
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn edit_album_by_id(&self, id: &str, input: AlbumInput) -> Result<Album, ServiceError> {
        models::album::validate(&input.name, input.year)?;
        let album = self.repo
            .update(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("Failed Updating Album. Id not found"))?;
        info!(album_id = %id, "album_updated");
        Ok(album)
    }

    #[instrument(skip(self))]
    pub async fn delete_album_by_id(&self, id: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Failed Deleting Album. Id not found"));
        }
        info!(album_id = %id, "album_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_album_cover(&self, id: &str, cover_url: &str) -> Result<(), ServiceError> {
        self.repo
            .set_cover(id, cover_url)
            .await?
            .ok_or_else(|| ServiceError::not_found("Failed Updating Album Cover. Id not found"))?;
        info!(album_id = %id, cover_url = %cover_url, "album_cover_updated");
        Ok(())
    }

    pub async fn album_exists(&self, id: &str) -> Result<bool, ServiceError> {
        self.repo.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albums::repository::mock::MockAlbumRepository;
    use crate::songs::domain::SongInput;
    use crate::songs::repository::mock::MockSongRepository;

    fn service() -> (AlbumService, Arc<MockSongRepository>) {
        let songs = Arc::new(MockSongRepository::default());
        (AlbumService::new(Arc::new(MockAlbumRepository::default()), songs.clone()), songs)
    }

    #[tokio::test]
    async fn album_view_lists_its_songs() {
        let (svc, songs) = service();
        let id = svc.add_album(AlbumInput { name: "Viva la Vida".into(), year: 2008 }).await.unwrap();
        songs.create(&SongInput {
            title: "Lovers in Japan".into(),
            year: 2008,
            genre: "Rock".into(),
            performer: "Coldplay".into(),
            duration: Some(260),
            album_id: Some(id.clone()),
        }).await.unwrap();

        let view = svc.get_album_by_id(&id).await.unwrap();
        assert_eq!(view.album.name, "Viva la Vida");
        assert_eq!(view.songs.len(), 1);
        assert_eq!(view.songs[0].title, "Lovers in Japan");
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (svc, _) = service();
        let err = svc.add_album(AlbumInput { name: " ".into(), year: 2008 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_album_reports_not_found() {
        let (svc, _) = service();
        assert!(matches!(svc.get_album_by_id("album-nope").await, Err(ServiceError::NotFound(_))));
        let err = svc.edit_album_by_id("album-nope", AlbumInput { name: "n".into(), year: 2000 }).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed Updating Album. Id not found");
        assert!(matches!(svc.delete_album_by_id("album-nope").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update_album_cover("album-nope", "http://x/y.png").await, Err(ServiceError::NotFound(_))));
    }
}
