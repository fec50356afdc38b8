//! File storage for album covers.
//!
//! `FileStorage` writes bytes and returns the stored file name; `CoverService`
//! checks the upload, stores it and records the public URL on the album.

use async_trait::async_trait;
use thiserror::Error;

pub mod local;
pub mod cover;

pub use cover::CoverService;
pub use local::LocalStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid file name: {0}")]
    InvalidName(String),
}

impl From<StorageError> for crate::errors::ServiceError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidName(name) => crate::errors::ServiceError::Validation(format!("invalid file name: {name}")),
            other => crate::errors::ServiceError::Storage(other.to_string()),
        }
    }
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist `bytes` and return the stored file name.
    async fn write_file(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// Records writes in memory for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryStorage {
        files: Mutex<Vec<(String, usize)>>, // (stored name, size)
    }

    impl MemoryStorage {
        pub fn files(&self) -> Vec<(String, usize)> { self.files.lock().unwrap().clone() }
    }

    #[async_trait]
    impl FileStorage for MemoryStorage {
        async fn write_file(&self, original_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
            let name = local::stored_name(original_name)?;
            self.files.lock().unwrap().push((name.clone(), bytes.len()));
            Ok(name)
        }
    }
}
