use async_trait::async_trait;
use moka::future::Cache;

use super::{CacheError, CacheStore};

/// Process-local cache backed by `moka::future::Cache`. No TTL is configured,
/// so entries live until deleted or evicted by capacity.
#[derive(Clone)]
pub struct MokaCacheStore {
    inner: Cache<String, String>,
}

impl MokaCacheStore {
    pub fn new(max_capacity: u64) -> Self {
        Self { inner: Cache::builder().max_capacity(max_capacity).build() }
    }

    pub fn from_config(cfg: &configs::CacheConfig) -> Self { Self::new(cfg.max_capacity) }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.inner.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.inner.invalidate(key).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let cache = MokaCacheStore::new(16);
        assert_eq!(cache.get("like:a").await.unwrap(), None);
        cache.set("like:a", "3".into()).await.unwrap();
        assert_eq!(cache.get("like:a").await.unwrap().as_deref(), Some("3"));
        cache.delete("like:a").await.unwrap();
        assert_eq!(cache.get("like:a").await.unwrap(), None);
    }
}
