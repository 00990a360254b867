//! Migration: Create certificates table.
//!
//! Certificates hang off both a business and an end user; removing either
//! parent removes its certificates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certificates::Title).string().not_null())
                    .col(ColumnDef::new(Certificates::SerialNumber).string().not_null())
                    .col(ColumnDef::new(Certificates::CourseTitle).string().null())
                    .col(
                        ColumnDef::new(Certificates::CourseDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Certificates::PdfUri).string().not_null())
                    .col(ColumnDef::new(Certificates::QrCodeUri).string().not_null())
                    .col(
                        ColumnDef::new(Certificates::Expires)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Certificates::ExpiryDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::BusinessId).uuid().not_null())
                    .col(ColumnDef::new(Certificates::EndUserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificates_business_id")
                            .from(Certificates::Table, Certificates::BusinessId)
                            .to(Businesses::Table, Businesses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificates_end_user_id")
                            .from(Certificates::Table, Certificates::EndUserId)
                            .to(EndUsers::Table, EndUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificates_business_id")
                    .table(Certificates::Table)
                    .col(Certificates::BusinessId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificates_end_user_id")
                    .table(Certificates::Table)
                    .col(Certificates::EndUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in ["idx_certificates_end_user_id", "idx_certificates_business_id"] {
            manager
                .drop_index(
                    Index::drop()
                        .name(index)
                        .table(Certificates::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Certificates {
    Table,
    Id,
    Title,
    SerialNumber,
    CourseTitle,
    CourseDate,
    PdfUri,
    QrCodeUri,
    Expires,
    ExpiryDate,
    CreatedDate,
    BusinessId,
    EndUserId,
}

#[derive(Iden)]
enum Businesses {
    Table,
    Id,
}

#[derive(Iden)]
enum EndUsers {
    Table,
    Id,
}
