use async_trait::async_trait;

use super::domain::Playlist;
use crate::errors::ServiceError;

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    async fn create(&self, name: &str, owner: &str) -> Result<Playlist, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Playlist>, ServiceError>;
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Playlist>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPlaylistRepository {
        playlists: Mutex<Vec<Playlist>>,
    }

    impl MockPlaylistRepository {
        pub fn seed(&self, id: &str, name: &str, owner: &str) -> Playlist {
            let playlist = Playlist { id: id.to_string(), name: name.to_string(), owner: owner.to_string() };
            self.playlists.lock().unwrap().push(playlist.clone());
            playlist
        }
    }

    #[async_trait]
    impl PlaylistRepository for MockPlaylistRepository {
        async fn create(&self, name: &str, owner: &str) -> Result<Playlist, ServiceError> {
            Ok(self.seed(&models::ids::new_id("playlist"), name, owner))
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Playlist>, ServiceError> {
            Ok(self.playlists.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn list_by_owner(&self, owner: &str) -> Result<Vec<Playlist>, ServiceError> {
            Ok(self.playlists.lock().unwrap().iter().filter(|p| p.owner == owner).cloned().collect())
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            let mut playlists = self.playlists.lock().unwrap();
            let before = playlists.len();
            playlists.retain(|p| p.id != id);
            Ok(playlists.len() != before)
        }
    }
}
