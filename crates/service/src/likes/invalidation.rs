use std::sync::Arc;

use async_trait::async_trait;

use super::domain::{like_key, LikeMutation};
use crate::cache::{CacheError, CacheStore};

/// Runs after a like-row write has committed.
#[async_trait]
pub trait LikeInvalidation: Send + Sync {
    async fn invalidate(&self, mutation: &LikeMutation) -> Result<(), CacheError>;
}

/// Drops the cached count of the mutated album.
pub struct CacheLikeInvalidation {
    cache: Arc<dyn CacheStore>,
}

impl CacheLikeInvalidation {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self { Self { cache } }
}

#[async_trait]
impl LikeInvalidation for CacheLikeInvalidation {
    async fn invalidate(&self, mutation: &LikeMutation) -> Result<(), CacheError> {
        self.cache.delete(&like_key(&mutation.album_id)).await
    }
}
