//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_admins_table;
mod m20240101_000002_create_businesses_table;
mod m20240101_000003_create_end_users_table;
mod m20240101_000004_create_employees_table;
mod m20240101_000005_create_certificates_table;
mod m20240101_000006_create_changelogs_table;
mod m20240201_000001_unique_login_emails;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_admins_table::Migration),
            Box::new(m20240101_000002_create_businesses_table::Migration),
            Box::new(m20240101_000003_create_end_users_table::Migration),
            Box::new(m20240101_000004_create_employees_table::Migration),
            Box::new(m20240101_000005_create_certificates_table::Migration),
            Box::new(m20240101_000006_create_changelogs_table::Migration),
            Box::new(m20240201_000001_unique_login_emails::Migration),
        ]
    }
}
