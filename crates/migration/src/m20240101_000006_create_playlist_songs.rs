//! Create `playlist_songs` join table between `playlists` and `songs`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistSongs::Table)
                    .if_not_exists()
                    .col(string_len(PlaylistSongs::Id, 50).primary_key())
                    .col(string_len(PlaylistSongs::PlaylistId, 50).not_null())
                    .col(string_len(PlaylistSongs::SongId, 50).not_null())
                    .col(timestamp_with_time_zone(PlaylistSongs::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PlaylistSongs::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_songs_playlist")
                            .from(PlaylistSongs::Table, PlaylistSongs::PlaylistId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_songs_song")
                            .from(PlaylistSongs::Table, PlaylistSongs::SongId)
                            .to(Songs::Table, Songs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PlaylistSongs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PlaylistSongs { Table, Id, PlaylistId, SongId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Playlists { Table, Id }

#[derive(DeriveIden)]
enum Songs { Table, Id }
