use async_trait::async_trait;

use super::domain::LikeMutation;
use crate::errors::ServiceError;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn count_likes(&self, album_id: &str) -> Result<u64, ServiceError>;
    async fn exists(&self, album_id: &str, user_id: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError>;
    /// `Ok(None)` when there was no row to remove.
    async fn delete(&self, album_id: &str, user_id: &str) -> Result<Option<LikeMutation>, ServiceError>;
    /// Remove the row if present, insert it otherwise, as one unit of work.
    async fn toggle(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError>;
}

/// In-memory like rows with call counting and switchable failures
pub mod mock {
    use super::*;
    use crate::likes::domain::MutationKind;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockLikeRepository {
        rows: Mutex<HashSet<(String, String)>>,
        count_calls: AtomicUsize,
        fail_writes: AtomicBool,
        fail_counts: AtomicBool,
    }

    impl MockLikeRepository {
        pub fn seed(&self, album_id: &str, user_id: &str) {
            self.rows.lock().unwrap().insert((album_id.to_string(), user_id.to_string()));
        }

        /// How many times the store was asked for a count.
        pub fn count_calls(&self) -> usize { self.count_calls.load(Ordering::SeqCst) }
        pub fn fail_writes(&self, on: bool) { self.fail_writes.store(on, Ordering::SeqCst); }
        pub fn fail_counts(&self, on: bool) { self.fail_counts.store(on, Ordering::SeqCst); }

        fn check_writable(&self) -> Result<(), ServiceError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("write rejected".into()));
            }
            Ok(())
        }
    }

    fn mutation(album_id: &str, user_id: &str, kind: MutationKind) -> LikeMutation {
        LikeMutation { album_id: album_id.to_string(), user_id: user_id.to_string(), kind }
    }

    #[async_trait]
    impl LikeRepository for MockLikeRepository {
        async fn count_likes(&self, album_id: &str) -> Result<u64, ServiceError> {
            self.count_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_counts.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("count rejected".into()));
            }
            Ok(self.rows.lock().unwrap().iter().filter(|(a, _)| a == album_id).count() as u64)
        }

        async fn exists(&self, album_id: &str, user_id: &str) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains(&(album_id.to_string(), user_id.to_string())))
        }

        async fn insert(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
            self.check_writable()?;
            if !self.rows.lock().unwrap().insert((album_id.to_string(), user_id.to_string())) {
                return Err(ServiceError::Db("duplicate key value violates unique constraint".into()));
            }
            Ok(mutation(album_id, user_id, MutationKind::Inserted))
        }

        async fn delete(&self, album_id: &str, user_id: &str) -> Result<Option<LikeMutation>, ServiceError> {
            self.check_writable()?;
            let removed = self.rows.lock().unwrap().remove(&(album_id.to_string(), user_id.to_string()));
            Ok(removed.then(|| mutation(album_id, user_id, MutationKind::Removed)))
        }

        async fn toggle(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
            self.check_writable()?;
            let key = (album_id.to_string(), user_id.to_string());
            let mut rows = self.rows.lock().unwrap();
            if rows.remove(&key) {
                Ok(mutation(album_id, user_id, MutationKind::Removed))
            } else {
                rows.insert(key);
                Ok(mutation(album_id, user_id, MutationKind::Inserted))
            }
        }
    }
}
