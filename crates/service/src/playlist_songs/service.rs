use std::sync::Arc;

use tracing::{info, instrument};

use super::repository::PlaylistSongRepository;
use crate::errors::ServiceError;
use crate::songs::domain::SongSummary;
use crate::songs::repository::SongRepository;

/// Playlist membership. Ownership is checked by the caller through
/// `PlaylistService::verify_playlist_owner` before any of these run.
pub struct PlaylistSongService {
    repo: Arc<dyn PlaylistSongRepository>,
    songs: Arc<dyn SongRepository>,
}

impl PlaylistSongService {
    pub fn new(repo: Arc<dyn PlaylistSongRepository>, songs: Arc<dyn SongRepository>) -> Self { Self { repo, songs } }

    #[instrument(skip(self))]
    pub async fn add_song_to_playlist(&self, playlist_id: &str, song_id: &str) -> Result<String, ServiceError> {
        if self.songs.find_by_id(song_id).await?.is_none() {
            return Err(ServiceError::not_found("Song not found"));
        }
        let id = self.repo.add(playlist_id, song_id).await?;
        info!(playlist_id = %playlist_id, song_id = %song_id, "playlist_song_added");
        Ok(id)
    }

    pub async fn get_songs_by_playlist(&self, playlist_id: &str) -> Result<Vec<SongSummary>, ServiceError> {
        let ids = self.repo.song_ids(playlist_id).await?;
        Ok(self.songs.find_by_ids(&ids).await?.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete_song_from_playlist(&self, playlist_id: &str, song_id: &str) -> Result<(), ServiceError> {
        if !self.repo.remove(playlist_id, song_id).await? {
            return Err(ServiceError::not_found("Failed Deleting Song from Playlist. Song not found"));
        }
        info!(playlist_id = %playlist_id, song_id = %song_id, "playlist_song_removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist_songs::repository::mock::MockPlaylistSongRepository;
    use crate::songs::domain::SongInput;
    use crate::songs::repository::mock::MockSongRepository;

    #[tokio::test]
    async fn add_list_remove() {
        let songs = Arc::new(MockSongRepository::default());
        let song = songs.create(&SongInput {
            title: "Clocks".into(),
            year: 2002,
            genre: "Rock".into(),
            performer: "Coldplay".into(),
            duration: Some(307),
            album_id: None,
        }).await.unwrap();
        let svc = PlaylistSongService::new(Arc::new(MockPlaylistSongRepository::default()), songs);

        assert!(matches!(svc.add_song_to_playlist("playlist-1", "song-missing").await, Err(ServiceError::NotFound(_))));
        svc.add_song_to_playlist("playlist-1", &song.id).await.unwrap();

        let listed = svc.get_songs_by_playlist("playlist-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Clocks");

        svc.delete_song_from_playlist("playlist-1", &song.id).await.unwrap();
        assert!(matches!(svc.delete_song_from_playlist("playlist-1", &song.id).await, Err(ServiceError::NotFound(_))));
        assert!(svc.get_songs_by_playlist("playlist-1").await.unwrap().is_empty());
    }
}
