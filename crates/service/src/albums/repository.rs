use async_trait::async_trait;

use super::domain::{Album, AlbumInput};
use crate::errors::ServiceError;

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn create(&self, input: &AlbumInput) -> Result<Album, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Album>, ServiceError>;
    /// `Ok(None)` when no album has this id.
    async fn update(&self, id: &str, input: &AlbumInput) -> Result<Option<Album>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
    async fn set_cover(&self, id: &str, cover_url: &str) -> Result<Option<Album>, ServiceError>;

    async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAlbumRepository {
        albums: Mutex<HashMap<String, Album>>,
    }

    impl MockAlbumRepository {
        /// Insert an album with a fixed id.
        pub fn seed(&self, id: &str, name: &str, year: i32) -> Album {
            let now = Utc::now();
            let album = Album { id: id.to_string(), name: name.to_string(), year, cover_url: None, inserted_at: now, updated_at: now };
            self.albums.lock().unwrap().insert(id.to_string(), album.clone());
            album
        }
    }

    #[async_trait]
    impl AlbumRepository for MockAlbumRepository {
        async fn create(&self, input: &AlbumInput) -> Result<Album, ServiceError> {
            let id = models::ids::new_id("album");
            Ok(self.seed(&id, &input.name, input.year))
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Album>, ServiceError> {
            Ok(self.albums.lock().unwrap().get(id).cloned())
        }

        async fn update(&self, id: &str, input: &AlbumInput) -> Result<Option<Album>, ServiceError> {
            let mut albums = self.albums.lock().unwrap();
            Ok(albums.get_mut(id).map(|a| {
                a.name = input.name.clone();
                a.year = input.year;
                a.updated_at = Utc::now();
                a.clone()
            }))
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            Ok(self.albums.lock().unwrap().remove(id).is_some())
        }

        async fn set_cover(&self, id: &str, cover_url: &str) -> Result<Option<Album>, ServiceError> {
            let mut albums = self.albums.lock().unwrap();
            Ok(albums.get_mut(id).map(|a| {
                a.cover_url = Some(cover_url.to_string());
                a.updated_at = Utc::now();
                a.clone()
            }))
        }
    }
}
