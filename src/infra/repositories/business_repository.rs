//! Business repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::base;
use super::entities::business::{self, ActiveModel, Entity as BusinessEntity};
use crate::domain::{Business, BusinessChanges, NewBusiness};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Business repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// List every business
    async fn list(&self) -> AppResult<Vec<Business>>;

    /// Find business by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Business>>;

    /// Find business by contact email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Business>>;

    /// Create a new business
    async fn create(&self, input: NewBusiness) -> AppResult<Business>;

    /// Overwrite the mutable fields of a business
    async fn update(&self, id: Uuid, changes: BusinessChanges) -> AppResult<Business>;

    /// Delete a business together with its employees and certificates
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BusinessRepository
pub struct BusinessStore {
    db: DatabaseConnection,
}

impl BusinessStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for BusinessStore {
    async fn list(&self) -> AppResult<Vec<Business>> {
        base::find_all::<BusinessEntity, _, _>(&self.db).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Business>> {
        base::find_one::<BusinessEntity, _, _>(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Business>> {
        let result = BusinessEntity::find()
            .filter(business::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Business::from))
    }

    async fn create(&self, input: NewBusiness) -> AppResult<Business> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            email: Set(input.email),
            phone: Set(input.phone),
            created_date: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Business::from(model))
    }

    async fn update(&self, id: Uuid, changes: BusinessChanges) -> AppResult<Business> {
        let existing = base::find_model::<BusinessEntity, _>(&self.db, id).await?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(changes.title);
        active.email = Set(changes.email);
        active.phone = Set(changes.phone);

        let model = active.update(&self.db).await?;
        Ok(Business::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<BusinessEntity, _>(&self.db, id).await
    }
}
