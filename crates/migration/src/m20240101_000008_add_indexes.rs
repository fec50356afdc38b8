use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Songs: lookup by album
        manager
            .create_index(
                Index::create()
                    .name("idx_songs_album")
                    .table(Songs::Table)
                    .col(Songs::AlbumId)
                    .to_owned(),
            )
            .await?;

        // Playlists: lookup by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_playlists_owner")
                    .table(Playlists::Table)
                    .col(Playlists::Owner)
                    .to_owned(),
            )
            .await?;

        // PlaylistSongs: composite unique (playlist_id, song_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_playlist_song")
                    .table(PlaylistSongs::Table)
                    .col(PlaylistSongs::PlaylistId)
                    .col(PlaylistSongs::SongId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_songs_album").table(Songs::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_playlists_owner").table(Playlists::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_playlist_song").table(PlaylistSongs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Songs { Table, AlbumId }

#[derive(DeriveIden)]
enum Playlists { Table, Owner }

#[derive(DeriveIden)]
enum PlaylistSongs { Table, PlaylistId, SongId }
