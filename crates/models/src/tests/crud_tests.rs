use crate::{album, song, user, user_album_like};
use crate::song::SongFields;
use sea_orm::EntityTrait;
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

fn unique(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Test album create, update, cover and delete
#[tokio::test]
async fn test_album_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = album::create(&db, "Viva la Vida", 2008).await?;
    assert!(created.id.starts_with("album-"));
    assert!(created.cover.is_none());

    let updated = album::update(&db, &created.id, "Viva la Vida (Deluxe)", 2009).await?.unwrap();
    assert_eq!(updated.name, "Viva la Vida (Deluxe)");
    assert_eq!(updated.year, 2009);

    let covered = album::set_cover(&db, &created.id, "http://localhost:5000/upload/images/1.png").await?.unwrap();
    assert_eq!(covered.cover.as_deref(), Some("http://localhost:5000/upload/images/1.png"));

    assert!(album::update(&db, "album-missing", "x", 2000).await?.is_none());

    album::Entity::delete_by_id(created.id.clone()).exec(&db).await?;
    assert!(album::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Test song creation linked to an album
#[tokio::test]
async fn test_song_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let a = album::create(&db, &unique("album"), 2020).await?;
    let s = song::create(&db, SongFields {
        title: "Life in Technicolor".into(),
        year: 2008,
        genre: "Indie".into(),
        performer: "Coldplay".into(),
        duration: Some(120),
        album_id: Some(a.id.clone()),
    }).await?;
    assert_eq!(s.album_id.as_deref(), Some(a.id.as_str()));

    let found = song::Entity::find_by_id(s.id.clone()).one(&db).await?.unwrap();
    assert_eq!(found.performer, "Coldplay");

    song::Entity::delete_by_id(s.id).exec(&db).await?;
    album::Entity::delete_by_id(a.id).exec(&db).await?;
    Ok(())
}

/// Test like insert/count/remove
#[tokio::test]
async fn test_like_rows() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let a = album::create(&db, &unique("album"), 2020).await?;
    let u = user::create(&db, &unique("user"), "hash", "Tester").await?;

    assert_eq!(user_album_like::count_for_album(&db, &a.id).await?, 0);
    user_album_like::insert(&db, &a.id, &u.id).await?;
    assert_eq!(user_album_like::count_for_album(&db, &a.id).await?, 1);
    assert!(user_album_like::find(&db, &a.id, &u.id).await?.is_some());

    // unique (album, user)
    assert!(user_album_like::insert(&db, &a.id, &u.id).await.is_err());

    assert!(user_album_like::remove(&db, &a.id, &u.id).await?);
    assert!(!user_album_like::remove(&db, &a.id, &u.id).await?);
    assert_eq!(user_album_like::count_for_album(&db, &a.id).await?, 0);

    album::Entity::delete_by_id(a.id).exec(&db).await?;
    user::Entity::delete_by_id(u.id).exec(&db).await?;
    Ok(())
}
