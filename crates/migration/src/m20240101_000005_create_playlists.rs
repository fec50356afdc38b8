//! Create `playlists` table owned by a row in `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Playlists::Table)
                    .if_not_exists()
                    .col(string_len(Playlists::Id, 50).primary_key())
                    .col(text(Playlists::Name).not_null())
                    .col(string_len(Playlists::Owner, 50).not_null())
                    .col(timestamp_with_time_zone(Playlists::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Playlists::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlists_owner")
                            .from(Playlists::Table, Playlists::Owner)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Playlists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Playlists { Table, Id, Name, Owner, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }
