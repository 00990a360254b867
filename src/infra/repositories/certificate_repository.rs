//! Certificate repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::base;
use super::entities::certificate::{self, ActiveModel, Entity as CertificateEntity};
use crate::domain::{Certificate, CertificateChanges, NewCertificate};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Certificate repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// List every certificate
    async fn list(&self) -> AppResult<Vec<Certificate>>;

    /// Certificates issued by one business
    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<Certificate>>;

    /// Certificates held by one end user
    async fn list_by_end_user(&self, end_user_id: Uuid) -> AppResult<Vec<Certificate>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Certificate>>;

    /// Issue a new certificate. Business and end user are expected to exist.
    async fn create(&self, input: NewCertificate) -> AppResult<Certificate>;

    async fn update(&self, id: Uuid, changes: CertificateChanges) -> AppResult<Certificate>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CertificateRepository
pub struct CertificateStore {
    db: DatabaseConnection,
}

impl CertificateStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CertificateRepository for CertificateStore {
    async fn list(&self) -> AppResult<Vec<Certificate>> {
        base::find_all::<CertificateEntity, _, _>(&self.db).await
    }

    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<Certificate>> {
        let models = CertificateEntity::find()
            .filter(certificate::Column::BusinessId.eq(business_id))
            .order_by_asc(certificate::Column::CreatedDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Certificate::from).collect())
    }

    async fn list_by_end_user(&self, end_user_id: Uuid) -> AppResult<Vec<Certificate>> {
        let models = CertificateEntity::find()
            .filter(certificate::Column::EndUserId.eq(end_user_id))
            .order_by_asc(certificate::Column::CreatedDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Certificate::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Certificate>> {
        base::find_one::<CertificateEntity, _, _>(&self.db, id).await
    }

    async fn create(&self, input: NewCertificate) -> AppResult<Certificate> {
        insert(&self.db, input).await
    }

    async fn update(&self, id: Uuid, changes: CertificateChanges) -> AppResult<Certificate> {
        apply_changes(&self.db, id, changes).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<CertificateEntity, _>(&self.db, id).await
    }
}

pub(crate) async fn insert<C: ConnectionTrait>(
    db: &C,
    input: NewCertificate,
) -> AppResult<Certificate> {
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        serial_number: Set(input.serial_number),
        course_title: Set(input.course_title),
        course_date: Set(input.course_date),
        pdf_uri: Set(input.pdf_uri),
        qr_code_uri: Set(input.qr_code_uri),
        expires: Set(input.expires),
        expiry_date: Set(input.expiry_date),
        created_date: Set(chrono::Utc::now()),
        business_id: Set(input.business_id),
        end_user_id: Set(input.end_user_id),
    };

    let model = active_model.insert(db).await?;
    Ok(Certificate::from(model))
}

pub(crate) async fn apply_changes<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    changes: CertificateChanges,
) -> AppResult<Certificate> {
    let existing = base::find_model::<CertificateEntity, _>(db, id).await?;

    let mut active: ActiveModel = existing.into();
    active.title = Set(changes.title);
    active.serial_number = Set(changes.serial_number);
    active.course_title = Set(changes.course_title);
    active.course_date = Set(changes.course_date);
    active.pdf_uri = Set(changes.pdf_uri);
    active.qr_code_uri = Set(changes.qr_code_uri);
    active.expires = Set(changes.expires);
    active.expiry_date = Set(changes.expiry_date);
    active.business_id = Set(changes.business_id);
    active.end_user_id = Set(changes.end_user_id);

    let model = active.update(db).await?;
    Ok(Certificate::from(model))
}
