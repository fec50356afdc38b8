use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::errors::ServiceError;
use crate::likes::domain::{LikeMutation, MutationKind};
use crate::likes::repository::LikeRepository;

pub struct SeaOrmLikeRepository {
    pub db: DatabaseConnection,
}

fn mutation(album_id: &str, user_id: &str, kind: MutationKind) -> LikeMutation {
    LikeMutation { album_id: album_id.to_string(), user_id: user_id.to_string(), kind }
}

#[async_trait::async_trait]
impl LikeRepository for SeaOrmLikeRepository {
    async fn count_likes(&self, album_id: &str) -> Result<u64, ServiceError> {
        Ok(models::user_album_like::count_for_album(&self.db, album_id).await?)
    }

    async fn exists(&self, album_id: &str, user_id: &str) -> Result<bool, ServiceError> {
        Ok(models::user_album_like::find(&self.db, album_id, user_id).await?.is_some())
    }

    async fn insert(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
        models::user_album_like::insert(&self.db, album_id, user_id).await?;
        Ok(mutation(album_id, user_id, MutationKind::Inserted))
    }

    async fn delete(&self, album_id: &str, user_id: &str) -> Result<Option<LikeMutation>, ServiceError> {
        let removed = models::user_album_like::remove(&self.db, album_id, user_id).await?;
        Ok(removed.then(|| mutation(album_id, user_id, MutationKind::Removed)))
    }

    async fn toggle(&self, album_id: &str, user_id: &str) -> Result<LikeMutation, ServiceError> {
        let txn = self.db.begin().await?;
        let kind = if models::user_album_like::find(&txn, album_id, user_id).await?.is_some() {
            models::user_album_like::remove(&txn, album_id, user_id).await?;
            MutationKind::Removed
        } else {
            models::user_album_like::insert(&txn, album_id, user_id).await?;
            MutationKind::Inserted
        };
        txn.commit().await?;
        Ok(mutation(album_id, user_id, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn toggle_flips_a_single_row() {
        let Some(db) = get_db().await else { return };
        let album = models::album::create(&db, "Ghost Stories", 2014).await.unwrap();
        let user = models::user::create(&db, &models::ids::new_id("u"), "hash", "Chris").await.unwrap();
        let repo = SeaOrmLikeRepository { db };

        let first = repo.toggle(&album.id, &user.id).await.unwrap();
        assert_eq!(first.kind, MutationKind::Inserted);
        assert_eq!(repo.count_likes(&album.id).await.unwrap(), 1);

        let second = repo.toggle(&album.id, &user.id).await.unwrap();
        assert_eq!(second.kind, MutationKind::Removed);
        assert_eq!(repo.count_likes(&album.id).await.unwrap(), 0);
        assert!(repo.delete(&album.id, &user.id).await.unwrap().is_none());
    }
}
