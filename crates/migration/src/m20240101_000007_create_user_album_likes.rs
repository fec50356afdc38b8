//! Create `user_album_likes`. One row per (album, user); uniqueness is
//! enforced by a composite index.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAlbumLikes::Table)
                    .if_not_exists()
                    .col(string_len(UserAlbumLikes::Id, 50).primary_key())
                    .col(string_len(UserAlbumLikes::AlbumId, 50).not_null())
                    .col(string_len(UserAlbumLikes::UserId, 50).not_null())
                    .col(timestamp_with_time_zone(UserAlbumLikes::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(UserAlbumLikes::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_album")
                            .from(UserAlbumLikes::Table, UserAlbumLikes::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user")
                            .from(UserAlbumLikes::Table, UserAlbumLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_like_album_user")
                    .table(UserAlbumLikes::Table)
                    .col(UserAlbumLikes::AlbumId)
                    .col(UserAlbumLikes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserAlbumLikes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserAlbumLikes { Table, Id, AlbumId, UserId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Albums { Table, Id }

#[derive(DeriveIden)]
enum Users { Table, Id }
