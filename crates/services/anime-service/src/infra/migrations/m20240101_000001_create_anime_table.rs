//! Migration: Create anime table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Anime::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Anime::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Anime::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup by name is a first-class query
        manager
            .create_index(
                Index::create()
                    .name("idx_anime_name")
                    .table(Anime::Table)
                    .col(Anime::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_anime_name")
                    .table(Anime::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Anime::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Anime {
    Table,
    Id,
    Name,
}
