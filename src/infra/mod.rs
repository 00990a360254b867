//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations, repositories and the Unit of Work
//! used to scope transactions.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, MigrationStatus, Migrator};
pub use repositories::{
    AdminRepository, AdminStore, BusinessRepository, BusinessStore, CertificateRepository,
    CertificateStore, ChangelogRepository, ChangelogStore, EmployeeRepository, EmployeeStore,
    EndUserRepository, EndUserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAdminRepository, MockBusinessRepository, MockCertificateRepository,
    MockChangelogRepository, MockEmployeeRepository, MockEndUserRepository,
};
