use crate::{album, user, user_album_like};
use sea_orm::{EntityTrait, TransactionTrait};
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

/// A rolled-back like insert leaves no row behind
#[tokio::test]
async fn test_like_rollback() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let a = album::create(&db, &format!("txn_album_{}", Uuid::new_v4()), 2021).await?;
    let u = user::create(&db, &format!("txn_{}", Uuid::new_v4().simple()), "hash", "Txn").await?;

    let txn = db.begin().await?;
    user_album_like::insert(&txn, &a.id, &u.id).await?;
    assert_eq!(user_album_like::count_for_album(&txn, &a.id).await?, 1);
    txn.rollback().await?;

    assert_eq!(user_album_like::count_for_album(&db, &a.id).await?, 0);

    album::Entity::delete_by_id(a.id).exec(&db).await?;
    user::Entity::delete_by_id(u.id).exec(&db).await?;
    Ok(())
}
