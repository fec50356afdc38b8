use async_trait::async_trait;

use super::domain::{Song, SongFilter, SongInput};
use crate::errors::ServiceError;

#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn create(&self, input: &SongInput) -> Result<Song, ServiceError>;
    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Song>, ServiceError>;
    async fn find_by_album(&self, album_id: &str) -> Result<Vec<Song>, ServiceError>;
    /// Songs for the given ids; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Song>, ServiceError>;
    async fn update(&self, id: &str, input: &SongInput) -> Result<Option<Song>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Keeps insertion order so listings are stable.
    #[derive(Default)]
    pub struct MockSongRepository {
        songs: Mutex<Vec<Song>>,
    }

    #[async_trait]
    impl SongRepository for MockSongRepository {
        async fn create(&self, input: &SongInput) -> Result<Song, ServiceError> {
            let now = Utc::now();
            let song = Song {
                id: models::ids::new_id("song"),
                title: input.title.clone(),
                year: input.year,
                genre: input.genre.clone(),
                performer: input.performer.clone(),
                duration: input.duration,
                album_id: input.album_id.clone(),
                inserted_at: now,
                updated_at: now,
            };
            self.songs.lock().unwrap().push(song.clone());
            Ok(song)
        }

        async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>, ServiceError> {
            Ok(self.songs.lock().unwrap().iter().filter(|s| filter.matches(s)).cloned().collect())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Song>, ServiceError> {
            Ok(self.songs.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }

        async fn find_by_album(&self, album_id: &str) -> Result<Vec<Song>, ServiceError> {
            Ok(self.songs.lock().unwrap().iter().filter(|s| s.album_id.as_deref() == Some(album_id)).cloned().collect())
        }

        async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Song>, ServiceError> {
            Ok(self.songs.lock().unwrap().iter().filter(|s| ids.contains(&s.id)).cloned().collect())
        }

        async fn update(&self, id: &str, input: &SongInput) -> Result<Option<Song>, ServiceError> {
            let mut songs = self.songs.lock().unwrap();
            Ok(songs.iter_mut().find(|s| s.id == id).map(|s| {
                s.title = input.title.clone();
                s.year = input.year;
                s.genre = input.genre.clone();
                s.performer = input.performer.clone();
                s.duration = input.duration;
                s.album_id = input.album_id.clone();
                s.updated_at = Utc::now();
                s.clone()
            }))
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            let mut songs = self.songs.lock().unwrap();
            let before = songs.len();
            songs.retain(|s| s.id != id);
            Ok(songs.len() != before)
        }
    }
}
