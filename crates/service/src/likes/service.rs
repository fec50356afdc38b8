use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{like_key, CountSource, LikeCount, LikeToggle};
use super::invalidation::{CacheLikeInvalidation, LikeInvalidation};
use super::repository::LikeRepository;
use super::writer::LikeWriter;
use crate::albums::repository::AlbumRepository;
use crate::cache::CacheStore;
use crate::errors::ServiceError;

pub struct LikeService {
    albums: Arc<dyn AlbumRepository>,
    repo: Arc<dyn LikeRepository>,
    cache: Arc<dyn CacheStore>,
    writer: LikeWriter,
}

impl LikeService {
    /// Wire the service with the cache-backed invalidation hook.
    pub fn new(albums: Arc<dyn AlbumRepository>, repo: Arc<dyn LikeRepository>, cache: Arc<dyn CacheStore>) -> Self {
        let invalidation = Arc::new(CacheLikeInvalidation::new(cache.clone()));
        Self::with_invalidation(albums, repo, cache, invalidation)
    }

    pub fn with_invalidation(
        albums: Arc<dyn AlbumRepository>,
        repo: Arc<dyn LikeRepository>,
        cache: Arc<dyn CacheStore>,
        invalidation: Arc<dyn LikeInvalidation>,
    ) -> Self {
        let writer = LikeWriter::new(repo.clone(), invalidation);
        Self { albums, repo, cache, writer }
    }

    /// Read the like count, cache first.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::albums::repository::mock::MockAlbumRepository;
    /// use service::cache::mock::MemoryCacheStore;
    /// use service::likes::{LikeService, domain::CountSource, repository::mock::MockLikeRepository};
    /// let repo = Arc::new(MockLikeRepository::default());
    /// repo.seed("album-1", "user-1");
    /// let svc = LikeService::new(Arc::new(MockAlbumRepository::default()), repo, Arc::new(MemoryCacheStore::default()));
    /// let first = tokio_test::block_on(svc.get_like_count("album-1")).unwrap();
    /// assert_eq!((first.count, first.source), (1, CountSource::Store));
    /// let second = tokio_test::block_on(svc.get_like_count("album-1")).unwrap();
    /// assert_eq!((second.count, second.source), (1, CountSource::Cache));
    /// ```
    #[instrument(skip(self))]
    pub async fn get_like_count(&self, album_id: &str) -> Result<LikeCount, ServiceError> {
        let key = like_key(album_id);
        match self.cache.get(&key).await {
            Ok(Some(raw)) => match raw.parse::<u64>() {
                Ok(count) => return Ok(LikeCount { count, source: CountSource::Cache }),
                Err(_) => warn!(key = %key, value = %raw, "cache_fallback"),
            },
            Ok(None) => debug!(key = %key, "cache_miss"),
            Err(e) => warn!(key = %key, error = %e, "cache_fallback"),
        }

        let count = self.repo.count_likes(album_id).await?;
        if let Err(e) = self.cache.set(&key, count.to_string()).await {
            warn!(key = %key, error = %e, "cache_populate_failed");
        }
        Ok(LikeCount { count, source: CountSource::Store })
    }

    #[instrument(skip(self))]
    pub async fn toggle_like(&self, album_id: &str, user_id: &str) -> Result<LikeToggle, ServiceError> {
        self.ensure_album(album_id).await?;
        let mutation = self.writer.toggle(album_id, user_id).await?;
        let outcome = mutation.toggle();
        info!(album_id = %album_id, user_id = %user_id, outcome = outcome.message(), "like_toggled");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn like(&self, album_id: &str, user_id: &str) -> Result<(), ServiceError> {
        self.ensure_album(album_id).await?;
        if self.repo.exists(album_id, user_id).await? {
            return Err(ServiceError::Invariant("Album already liked".into()));
        }
        self.writer.insert(album_id, user_id).await?;
        info!(album_id = %album_id, user_id = %user_id, "album_liked");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn unlike(&self, album_id: &str, user_id: &str) -> Result<(), ServiceError> {
        self.ensure_album(album_id).await?;
        if self.writer.delete(album_id, user_id).await?.is_none() {
            return Err(ServiceError::Invariant("Failed deleting album like".into()));
        }
        info!(album_id = %album_id, user_id = %user_id, "album_unliked");
        Ok(())
    }

    async fn ensure_album(&self, album_id: &str) -> Result<(), ServiceError> {
        if !self.albums.exists(album_id).await? {
            return Err(ServiceError::not_found("Album not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albums::repository::mock::MockAlbumRepository;
    use crate::cache::mock::MemoryCacheStore;
    use crate::likes::repository::mock::MockLikeRepository;

    struct Fixture {
        svc: LikeService,
        repo: Arc<MockLikeRepository>,
        cache: Arc<MemoryCacheStore>,
    }

    fn fixture() -> Fixture {
        let albums = Arc::new(MockAlbumRepository::default());
        albums.seed("album-1", "A Rush of Blood to the Head", 2002);
        let repo = Arc::new(MockLikeRepository::default());
        for user in ["user-5", "user-6", "user-7"] {
            repo.seed("album-1", user);
        }
        let cache = Arc::new(MemoryCacheStore::default());
        let svc = LikeService::new(albums, repo.clone(), cache.clone());
        Fixture { svc, repo, cache }
    }

    fn count(n: u64, source: CountSource) -> LikeCount { LikeCount { count: n, source } }

    #[tokio::test]
    async fn store_then_cache_then_store_after_unlike() {
        let f = fixture();
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Store));
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Cache));
        assert_eq!(f.repo.count_calls(), 1);

        f.svc.unlike("album-1", "user-7").await.unwrap();
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(2, CountSource::Store));
    }

    #[tokio::test]
    async fn stale_entry_is_dropped_by_unlike() {
        let f = fixture();
        f.cache.put_raw("like:album-1", "99");
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(99, CountSource::Cache));

        f.svc.unlike("album-1", "user-5").await.unwrap();
        assert_eq!(f.cache.peek("like:album-1"), None);
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(2, CountSource::Store));
    }

    #[tokio::test]
    async fn toggle_twice_likes_then_unlikes() {
        let f = fixture();
        assert_eq!(f.svc.toggle_like("album-1", "user-1").await.unwrap(), LikeToggle::Liked);
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(4, CountSource::Store));
        assert_eq!(f.svc.toggle_like("album-1", "user-1").await.unwrap(), LikeToggle::Unliked);
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Store));
    }

    #[tokio::test]
    async fn toggle_on_unknown_album_writes_nothing() {
        let f = fixture();
        let err = f.svc.toggle_like("album-404", "user-1").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(!f.repo.exists("album-404", "user-1").await.unwrap());
    }

    #[tokio::test]
    async fn failed_write_keeps_cached_value() {
        let f = fixture();
        f.svc.get_like_count("album-1").await.unwrap();
        f.repo.fail_writes(true);

        assert!(matches!(f.svc.toggle_like("album-1", "user-1").await, Err(ServiceError::Db(_))));
        assert_eq!(f.cache.peek("like:album-1").as_deref(), Some("3"));
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Cache));
    }

    #[tokio::test]
    async fn cache_failures_fall_back_to_store() {
        let f = fixture();
        f.cache.fail_reads(true);
        f.cache.fail_writes(true);
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Store));
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Store));
        assert_eq!(f.repo.count_calls(), 2);
    }

    #[tokio::test]
    async fn unparsable_entry_is_replaced_from_store() {
        let f = fixture();
        f.cache.put_raw("like:album-1", "three");
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap(), count(3, CountSource::Store));
        assert_eq!(f.cache.peek("like:album-1").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn store_failure_after_miss_is_fatal() {
        let f = fixture();
        f.repo.fail_counts(true);
        assert!(matches!(f.svc.get_like_count("album-1").await, Err(ServiceError::Db(_))));
    }

    #[tokio::test]
    async fn explicit_like_and_unlike_rules() {
        let f = fixture();
        let err = f.svc.like("album-1", "user-5").await.unwrap_err();
        assert!(matches!(err, ServiceError::Invariant(_)));
        let err = f.svc.unlike("album-1", "user-1").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed deleting album like");
        f.svc.like("album-1", "user-1").await.unwrap();
        assert_eq!(f.svc.get_like_count("album-1").await.unwrap().count, 4);
    }

    #[tokio::test]
    async fn unlike_on_unknown_album_is_not_found() {
        let f = fixture();
        f.cache.put_raw("like:album-404", "1");
        let err = f.svc.unlike("album-404", "user-5").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Album not found");
        assert_eq!(f.cache.peek("like:album-404").as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn unknown_album_counts_zero() {
        let f = fixture();
        assert_eq!(f.svc.get_like_count("album-unknown").await.unwrap(), count(0, CountSource::Store));
    }
}
