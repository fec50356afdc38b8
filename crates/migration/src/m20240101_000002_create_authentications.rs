//! Create `authentications` table holding issued refresh tokens.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authentications::Table)
                    .if_not_exists()
                    .col(text(Authentications::Token).primary_key())
                    .col(timestamp_with_time_zone(Authentications::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Authentications::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Authentications { Table, Token, CreatedAt }
