//! Key-value cache seam used by the like counter.
//!
//! Values are plain strings and entries have no expiry; callers remove
//! entries explicitly.

use async_trait::async_trait;
use thiserror::Error;

pub mod moka_store;

pub use moka_store::MokaCacheStore;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` on a miss.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// In-memory cache with switchable failures for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryCacheStore {
        entries: Mutex<HashMap<String, String>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl MemoryCacheStore {
        pub fn fail_reads(&self, on: bool) { self.fail_reads.store(on, Ordering::SeqCst); }
        pub fn fail_writes(&self, on: bool) { self.fail_writes.store(on, Ordering::SeqCst); }

        /// Seed or overwrite an entry, bypassing the failure switches.
        pub fn put_raw(&self, key: &str, value: &str) {
            self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        }

        pub fn peek(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl CacheStore for MemoryCacheStore {
        async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(CacheError::Unavailable("read refused".into()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CacheError::Unavailable("write refused".into()));
            }
            self.entries.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), CacheError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(CacheError::Unavailable("delete refused".into()));
            }
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }
}
