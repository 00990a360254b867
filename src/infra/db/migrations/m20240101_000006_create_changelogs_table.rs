//! Migration: Create changelogs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Changelogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Changelogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Changelogs::Content).text().not_null())
                    .col(ColumnDef::new(Changelogs::ChangeType).string().not_null())
                    .col(
                        ColumnDef::new(Changelogs::WasRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Changelogs::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Changelogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Changelogs {
    Table,
    Id,
    Content,
    ChangeType,
    WasRead,
    CreatedDate,
}
