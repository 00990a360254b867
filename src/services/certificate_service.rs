//! Certificate service - issuing and maintaining certificates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Certificate, CertificateChanges, NewCertificate};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{TransactionContext, UnitOfWork};
use crate::with_transaction;

/// Certificate service trait for dependency injection.
#[async_trait]
pub trait CertificateService: Send + Sync {
    async fn list_certificates(&self) -> AppResult<Vec<Certificate>>;

    async fn get_certificate(&self, id: Uuid) -> AppResult<Certificate>;

    /// Issue a certificate from an existing business to an existing end user
    async fn issue_certificate(&self, input: NewCertificate) -> AppResult<Certificate>;

    async fn update_certificate(
        &self,
        id: Uuid,
        changes: CertificateChanges,
    ) -> AppResult<Certificate>;

    async fn delete_certificate(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CertificateService using Unit of Work.
pub struct CertificateManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CertificateManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Both parents must exist before a certificate may point at them.
async fn check_parents(
    ctx: &TransactionContext<'_>,
    business_id: Uuid,
    end_user_id: Uuid,
) -> AppResult<()> {
    if !ctx.businesses().exists(business_id).await? {
        return Err(AppError::invalid_argument(format!(
            "Business {} does not exist",
            business_id
        )));
    }
    if !ctx.end_users().exists(end_user_id).await? {
        return Err(AppError::invalid_argument(format!(
            "End user {} does not exist",
            end_user_id
        )));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> CertificateService for CertificateManager<U> {
    async fn list_certificates(&self) -> AppResult<Vec<Certificate>> {
        self.uow.certificates().list().await
    }

    async fn get_certificate(&self, id: Uuid) -> AppResult<Certificate> {
        self.uow.certificates().find_by_id(id).await?.ok_or_not_found()
    }

    async fn issue_certificate(&self, input: NewCertificate) -> AppResult<Certificate> {
        let certificate = with_transaction!(self.uow, |ctx| {
            check_parents(&ctx, input.business_id, input.end_user_id).await?;
            ctx.certificates().create(input).await
        })?;

        tracing::info!(
            certificate_id = %certificate.id,
            serial_number = %certificate.serial_number,
            business_id = %certificate.business_id,
            end_user_id = %certificate.end_user_id,
            "Certificate issued"
        );
        Ok(certificate)
    }

    async fn update_certificate(
        &self,
        id: Uuid,
        changes: CertificateChanges,
    ) -> AppResult<Certificate> {
        with_transaction!(self.uow, |ctx| {
            check_parents(&ctx, changes.business_id, changes.end_user_id).await?;
            ctx.certificates().update(id, changes).await
        })
    }

    async fn delete_certificate(&self, id: Uuid) -> AppResult<()> {
        self.uow.certificates().delete(id).await?;
        tracing::info!(certificate_id = %id, "Certificate deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockCertificateRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_get_certificate_not_found() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork {
            certificates: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let result = CertificateManager::new(Arc::new(uow))
            .get_certificate(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_certificate() {
        let mut repo = MockCertificateRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let uow = TestUnitOfWork {
            certificates: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let result = CertificateManager::new(Arc::new(uow))
            .delete_certificate(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
