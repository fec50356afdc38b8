use std::sync::Arc;

use tracing::{debug, error};

use super::domain::LikeMutation;
use super::invalidation::LikeInvalidation;
use super::repository::LikeRepository;
use crate::errors::ServiceError;

/// The single write path for like rows.
///
/// A mutation is passed to the invalidation hook only once the repository
/// call has returned `Ok`; failed writes leave the cache untouched.
pub struct LikeWriter {
    repo: Arc<dyn LikeRepository>,
    invalidation: Arc<dyn LikeInvalidation>,
}

impl LikeWriter {
    pub fn new(repo: Arc<dyn LikeRepository>, invalidation: Arc<dyn LikeInvalidation>) -> Self {
        Self { repo, invalidation }
    }

    pub async fn toggle(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
        let mutation = self.repo.toggle(album_id, user_id).await?;
        self.after_commit(&mutation).await;
        Ok(mutation)
    }

    pub async fn insert(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
        let mutation = self.repo.insert(album_id, user_id).await?;
        self.after_commit(&mutation).await;
        Ok(mutation)
    }

    pub async fn delete(&self, album_id: &str, user_id: &str) -> Result<Option<LikeMutation>, ServiceError> {
        let Some(mutation) = self.repo.delete(album_id, user_id).await? else { return Ok(None) };
        self.after_commit(&mutation).await;
        Ok(Some(mutation))
    }

    async fn after_commit(&self, mutation: &LikeMutation) {
        match self.invalidation.invalidate(mutation).await {
            Ok(()) => debug!(album_id = %mutation.album_id, "like_cache_invalidated"),
            // the row is committed; a stale entry survives until the next successful invalidation
            Err(e) => error!(album_id = %mutation.album_id, error = %e, "like_cache_invalidation_failed"),
        }
    }
}
