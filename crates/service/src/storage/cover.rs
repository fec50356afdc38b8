use std::sync::Arc;

use tracing::{info, instrument};

use super::FileStorage;
use crate::albums::repository::AlbumRepository;
use crate::errors::ServiceError;

/// MIME types accepted for album covers.
pub const ALLOWED_COVER_TYPES: &[&str] = &[
    "image/apng",
    "image/avif",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/webp",
];

/// URL prefix under which stored covers are served.
pub const COVER_ROUTE: &str = "/upload/images";

pub struct CoverService {
    storage: Arc<dyn FileStorage>,
    albums: Arc<dyn AlbumRepository>,
    max_bytes: usize,
    public_base_url: String,
}

impl CoverService {
    pub fn new(storage: Arc<dyn FileStorage>, albums: Arc<dyn AlbumRepository>, cfg: &configs::UploadsConfig) -> Self {
        Self {
            storage,
            albums,
            max_bytes: cfg.max_bytes,
            public_base_url: cfg.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn max_bytes(&self) -> usize { self.max_bytes }

    pub fn validate(&self, content_type: Option<&str>, size: usize) -> Result<(), ServiceError> {
        let mime = content_type.map(|c| c.split(';').next().unwrap_or_default().trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some(m) if ALLOWED_COVER_TYPES.contains(&m) => {}
            _ => return Err(ServiceError::Validation("\"content-type\" must be a supported image type".into())),
        }
        if size > self.max_bytes {
            return Err(ServiceError::PayloadTooLarge(format!("cover exceeds {} bytes", self.max_bytes)));
        }
        Ok(())
    }

    /// Store the cover and point the album at it; returns the cover URL.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_album_cover(
        &self,
        album_id: &str,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, ServiceError> {
        self.validate(content_type, bytes.len())?;
        if !self.albums.exists(album_id).await? {
            return Err(ServiceError::not_found("Album not found"));
        }
        let stored = self.storage.write_file(file_name, bytes).await?;
        let url = format!("{}{}/{}", self.public_base_url, COVER_ROUTE, stored);
        self.albums
            .set_cover(album_id, &url)
            .await?
            .ok_or_else(|| ServiceError::not_found("Album not found"))?;
        info!(album_id = %album_id, cover_url = %url, "album_cover_uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albums::repository::mock::MockAlbumRepository;
    use crate::storage::mock::MemoryStorage;

    fn fixture() -> (CoverService, Arc<MemoryStorage>, Arc<MockAlbumRepository>) {
        let storage = Arc::new(MemoryStorage::default());
        let albums = Arc::new(MockAlbumRepository::default());
        albums.seed("album-1", "Mylo Xyloto", 2011);
        let cfg = configs::UploadsConfig {
            dir: "unused".into(),
            max_bytes: 16,
            public_base_url: "http://localhost:5000".into(),
        };
        (CoverService::new(storage.clone(), albums.clone(), &cfg), storage, albums)
    }

    #[tokio::test]
    async fn cover_url_is_recorded_on_the_album() {
        let (svc, storage, albums) = fixture();
        let url = svc.upload_album_cover("album-1", "cover.png", Some("image/png"), b"png").await.unwrap();
        assert!(url.starts_with("http://localhost:5000/upload/images/"));
        assert!(url.ends_with("cover.png"));
        assert_eq!(storage.files().len(), 1);
        assert_eq!(albums.find_by_id("album-1").await.unwrap().unwrap().cover_url, Some(url));
    }

    #[tokio::test]
    async fn rejects_bad_type_and_oversize_before_writing() {
        let (svc, storage, _) = fixture();
        let err = svc.upload_album_cover("album-1", "notes.txt", Some("text/plain"), b"hi").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(matches!(svc.upload_album_cover("album-1", "c.png", None, b"hi").await, Err(ServiceError::Validation(_))));
        let err = svc.upload_album_cover("album-1", "big.png", Some("image/png"), &[0u8; 17]).await.unwrap_err();
        assert!(matches!(err, ServiceError::PayloadTooLarge(_)));
        assert!(storage.files().is_empty());
    }

    #[tokio::test]
    async fn unknown_album_writes_nothing() {
        let (svc, storage, _) = fixture();
        let err = svc.upload_album_cover("album-x", "c.webp", Some("image/webp"), b"w").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(storage.files().is_empty());
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let (svc, _, _) = fixture();
        assert!(svc.validate(Some("image/jpeg; charset=binary"), 1).is_ok());
    }
}
