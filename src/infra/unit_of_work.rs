//! Unit of Work pattern implementation.
//!
//! Centralizes access to every repository and scopes multi-step writes to a
//! single database transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    IsolationLevel, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::{business, end_user};
use super::repositories::{
    certificate_repository, employee_repository, exists, AdminRepository, AdminStore,
    BusinessRepository, BusinessStore, CertificateRepository, CertificateStore,
    ChangelogRepository, ChangelogStore, EmployeeRepository, EmployeeStore, EndUserRepository,
    EndUserStore,
};
use crate::domain::{
    Certificate, CertificateChanges, Employee, EmployeeChanges, NewCertificate, NewEmployee,
};
use crate::errors::AppResult;

/// Boxed future returned by a transaction body.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because `transaction` is generic. Service tests
/// build a small implementation around the mocked repositories instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn admins(&self) -> Arc<dyn AdminRepository>;

    fn businesses(&self) -> Arc<dyn BusinessRepository>;

    fn certificates(&self) -> Arc<dyn CertificateRepository>;

    fn changelogs(&self) -> Arc<dyn ChangelogRepository>;

    fn employees(&self) -> Arc<dyn EmployeeRepository>;

    fn end_users(&self) -> Arc<dyn EndUserRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Commits when the closure returns `Ok`, rolls back on `Err`.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn businesses(&self) -> TxBusinessRepository<'_> {
        TxBusinessRepository { txn: self.txn }
    }

    pub fn end_users(&self) -> TxEndUserRepository<'_> {
        TxEndUserRepository { txn: self.txn }
    }

    pub fn employees(&self) -> TxEmployeeRepository<'_> {
        TxEmployeeRepository { txn: self.txn }
    }

    pub fn certificates(&self) -> TxCertificateRepository<'_> {
        TxCertificateRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    admin_repo: Arc<AdminStore>,
    business_repo: Arc<BusinessStore>,
    certificate_repo: Arc<CertificateStore>,
    changelog_repo: Arc<ChangelogStore>,
    employee_repo: Arc<EmployeeStore>,
    end_user_repo: Arc<EndUserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            admin_repo: Arc::new(AdminStore::new(db.clone())),
            business_repo: Arc::new(BusinessStore::new(db.clone())),
            certificate_repo: Arc::new(CertificateStore::new(db.clone())),
            changelog_repo: Arc::new(ChangelogStore::new(db.clone())),
            employee_repo: Arc::new(EmployeeStore::new(db.clone())),
            end_user_repo: Arc::new(EndUserStore::new(db.clone())),
            db,
        }
    }

    async fn begin(&self) -> AppResult<DatabaseTransaction> {
        // SQLite has no per-transaction isolation settings.
        let txn = match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => self.db.begin().await?,
            _ => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::ReadCommitted),
                        Some(AccessMode::ReadWrite),
                    )
                    .await?
            }
        };
        Ok(txn)
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn admins(&self) -> Arc<dyn AdminRepository> {
        self.admin_repo.clone()
    }

    fn businesses(&self) -> Arc<dyn BusinessRepository> {
        self.business_repo.clone()
    }

    fn certificates(&self) -> Arc<dyn CertificateRepository> {
        self.certificate_repo.clone()
    }

    fn changelogs(&self) -> Arc<dyn ChangelogRepository> {
        self.changelog_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }

    fn end_users(&self) -> Arc<dyn EndUserRepository> {
        self.end_user_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.begin().await?;
        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound business lookups.
pub struct TxBusinessRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxBusinessRepository<'_> {
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        exists::<business::Entity, _>(self.txn, id).await
    }
}

/// Transaction-bound end user lookups.
pub struct TxEndUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxEndUserRepository<'_> {
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        exists::<end_user::Entity, _>(self.txn, id).await
    }
}

/// Transaction-bound employee writes.
pub struct TxEmployeeRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxEmployeeRepository<'_> {
    pub async fn create(&self, input: NewEmployee) -> AppResult<Employee> {
        employee_repository::insert(self.txn, input).await
    }

    pub async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Employee> {
        employee_repository::apply_changes(self.txn, id, changes).await
    }
}

/// Transaction-bound certificate writes.
pub struct TxCertificateRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxCertificateRepository<'_> {
    pub async fn create(&self, input: NewCertificate) -> AppResult<Certificate> {
        certificate_repository::insert(self.txn, input).await
    }

    pub async fn update(&self, id: Uuid, changes: CertificateChanges) -> AppResult<Certificate> {
        certificate_repository::apply_changes(self.txn, id, changes).await
    }
}

/// Run a block inside `UnitOfWork::transaction`, binding the context to `$ctx`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
