//! Create `albums` table. `cover` holds the public URL of the uploaded image.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(string_len(Albums::Id, 50).primary_key())
                    .col(text(Albums::Name).not_null())
                    .col(integer(Albums::Year).not_null())
                    .col(ColumnDef::new(Albums::Cover).text().null())
                    .col(timestamp_with_time_zone(Albums::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Albums::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Albums::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Albums { Table, Id, Name, Year, Cover, CreatedAt, UpdatedAt }
