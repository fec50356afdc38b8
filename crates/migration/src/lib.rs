//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_authentications;
mod m20240101_000003_create_albums;
mod m20240101_000004_create_songs;
mod m20240101_000005_create_playlists;
mod m20240101_000006_create_playlist_songs;
mod m20240101_000007_create_user_album_likes;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_authentications::Migration),
            Box::new(m20240101_000003_create_albums::Migration),
            Box::new(m20240101_000004_create_songs::Migration),
            Box::new(m20240101_000005_create_playlists::Migration),
            Box::new(m20240101_000006_create_playlist_songs::Migration),
            Box::new(m20240101_000007_create_user_album_likes::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
