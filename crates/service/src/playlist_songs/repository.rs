use async_trait::async_trait;

use crate::errors::ServiceError;

#[async_trait]
pub trait PlaylistSongRepository: Send + Sync {
    /// Returns the id of the new link row.
    async fn add(&self, playlist_id: &str, song_id: &str) -> Result<String, ServiceError>;
    async fn song_ids(&self, playlist_id: &str) -> Result<Vec<String>, ServiceError>;
    async fn remove(&self, playlist_id: &str, song_id: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPlaylistSongRepository {
        links: Mutex<Vec<(String, String, String)>>, // (id, playlist_id, song_id)
    }

    #[async_trait]
    impl PlaylistSongRepository for MockPlaylistSongRepository {
        async fn add(&self, playlist_id: &str, song_id: &str) -> Result<String, ServiceError> {
            let mut links = self.links.lock().unwrap();
            if links.iter().any(|(_, p, s)| p == playlist_id && s == song_id) {
                return Err(ServiceError::Db("duplicate key value violates unique constraint".into()));
            }
            let id = models::ids::new_id("playlist-song");
            links.push((id.clone(), playlist_id.to_string(), song_id.to_string()));
            Ok(id)
        }

        async fn song_ids(&self, playlist_id: &str) -> Result<Vec<String>, ServiceError> {
            Ok(self.links.lock().unwrap().iter().filter(|(_, p, _)| p == playlist_id).map(|(_, _, s)| s.clone()).collect())
        }

        async fn remove(&self, playlist_id: &str, song_id: &str) -> Result<bool, ServiceError> {
            let mut links = self.links.lock().unwrap();
            let before = links.len();
            links.retain(|(_, p, s)| !(p == playlist_id && s == song_id));
            Ok(links.len() != before)
        }
    }
}
