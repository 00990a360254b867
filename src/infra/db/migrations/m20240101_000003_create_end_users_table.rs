//! Migration: Create end_users table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EndUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EndUsers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(EndUsers::Name).string().not_null())
                    .col(ColumnDef::new(EndUsers::Email).string().not_null())
                    .col(
                        ColumnDef::new(EndUsers::EmailVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(EndUsers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(EndUsers::PhoneMobile).string().null())
                    .col(ColumnDef::new(EndUsers::PhoneMobileVerified).boolean().null())
                    .col(ColumnDef::new(EndUsers::PhoneHome).string().null())
                    .col(ColumnDef::new(EndUsers::AddressCode).string().null())
                    .col(ColumnDef::new(EndUsers::AddressDetailed).string().null())
                    .col(
                        ColumnDef::new(EndUsers::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EndUsers::LastLoginDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EndUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EndUsers {
    Table,
    Id,
    Name,
    Email,
    EmailVerified,
    PasswordHash,
    PhoneMobile,
    PhoneMobileVerified,
    PhoneHome,
    AddressCode,
    AddressDetailed,
    CreatedDate,
    LastLoginDate,
}
