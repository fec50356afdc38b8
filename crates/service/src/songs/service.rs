use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Song, SongFilter, SongInput, SongSummary};
use super::repository::SongRepository;
use crate::albums::repository::AlbumRepository;
use crate::errors::ServiceError;

pub struct SongService {
    repo: Arc<dyn SongRepository>,
    albums: Arc<dyn AlbumRepository>,
}

impl SongService {
    pub fn new(repo: Arc<dyn SongRepository>, albums: Arc<dyn AlbumRepository>) -> Self { Self { repo, albums } }

    async fn check_input(&self, input: &SongInput) -> Result<(), ServiceError> {
        models::song::validate(&models::song::SongFields::from(input))?;
        if let Some(album_id) = &input.album_id {
            if !self.albums.exists(album_id).await? {
                return Err(ServiceError::Invariant("Album not found".into()));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn add_song(&self, input: SongInput) -> Result<String, ServiceError> {
        self.check_input(&input).await?;
        let song = self.repo.create(&input).await?;
        info!(song_id = %song.id, album_id = ?song.album_id, "song_created");
        Ok(song.id)
    }

    pub async fn get_songs(&self, filter: SongFilter) -> Result<Vec<SongSummary>, ServiceError> {
        Ok(self.repo.list(&filter).await?.into_iter().map(Into::into).collect())
    }

    pub async fn get_song_by_id(&self, id: &str) -> Result<Song, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Song not found"))
    }

    pub async fn get_songs_by_album(&self, album_id: &str) -> Result<Vec<SongSummary>, ServiceError> {
        Ok(self.repo.find_by_album(album_id).await?.into_iter().map(Into::into).collect())
    }

    pub async fn song_exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.is_some())
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn edit_song_by_id(&self, id: &str, input: SongInput) -> Result<Song, ServiceError> {
        self.check_input(&input).await?;
        let song = self.repo
            .update(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("Failed Updating Song. Id not found"))?;
        info!(song_id = %id, "song_updated");
        Ok(song)
    }

    #[instrument(skip(self))]
    pub async fn delete_song_by_id(&self, id: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Failed Deleting Song. Id not found"));
        }
        info!(song_id = %id, "song_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albums::repository::mock::MockAlbumRepository;
    use crate::songs::repository::mock::MockSongRepository;

    fn input(title: &str, performer: &str, album_id: Option<&str>) -> SongInput {
        SongInput {
            title: title.into(),
            year: 2008,
            genre: "Rock".into(),
            performer: performer.into(),
            duration: None,
            album_id: album_id.map(String::from),
        }
    }

    fn service() -> (SongService, Arc<MockAlbumRepository>) {
        let albums = Arc::new(MockAlbumRepository::default());
        (SongService::new(Arc::new(MockSongRepository::default()), albums.clone()), albums)
    }

    #[tokio::test]
    async fn unknown_album_is_a_client_error() {
        let (svc, _) = service();
        let err = svc.add_song(input("Strawberry Swing", "Coldplay", Some("album-missing"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invariant(ref m) if m == "Album not found"));
    }

    #[tokio::test]
    async fn filters_and_album_listing() {
        let (svc, albums) = service();
        albums.seed("album-1", "Viva la Vida", 2008);
        svc.add_song(input("Viva la Vida", "Coldplay", Some("album-1"))).await.unwrap();
        svc.add_song(input("Uprising", "Muse", None)).await.unwrap();

        let muse = svc.get_songs(SongFilter { title: None, performer: Some("MUSE".into()) }).await.unwrap();
        assert_eq!(muse.len(), 1);
        assert_eq!(muse[0].title, "Uprising");
        assert_eq!(svc.get_songs(SongFilter::default()).await.unwrap().len(), 2);
        assert_eq!(svc.get_songs_by_album("album-1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_and_delete_missing_song() {
        let (svc, _) = service();
        assert!(matches!(svc.get_song_by_id("song-x").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.edit_song_by_id("song-x", input("a", "b", None)).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_song_by_id("song-x").await, Err(ServiceError::NotFound(_))));
    }
}
