//! Admin repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::base;
use super::entities::admin::{self, ActiveModel, Entity as AdminEntity};
use crate::domain::{Admin, AdminChanges, NewAdmin};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// List every admin
    async fn list(&self) -> AppResult<Vec<Admin>>;

    /// Find admin by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>>;

    /// Find admin by email address (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Create a new admin
    async fn create(&self, input: NewAdmin) -> AppResult<Admin>;

    /// Overwrite the mutable fields of an admin
    async fn update(&self, id: Uuid, changes: AdminChanges) -> AppResult<Admin>;

    /// Delete admin by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Stamp the last login time
    async fn record_login(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AdminRepository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn list(&self) -> AppResult<Vec<Admin>> {
        base::find_all::<AdminEntity, _, _>(&self.db).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Admin>> {
        base::find_one::<AdminEntity, _, _>(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Admin::from))
    }

    async fn create(&self, input: NewAdmin) -> AppResult<Admin> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email.clone()),
            email_verified: Set(false),
            password_hash: Set(input.password_hash),
            phone_mobile: Set(input.phone_mobile),
            phone_mobile_verified: Set(false),
            created_date: Set(now),
            last_login_date: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| base::email_taken(e, Some(&input.email)))?;
        Ok(Admin::from(model))
    }

    async fn update(&self, id: Uuid, changes: AdminChanges) -> AppResult<Admin> {
        let existing = base::find_model::<AdminEntity, _>(&self.db, id).await?;

        let mut active: ActiveModel = existing.into();
        active.first_name = Set(changes.first_name);
        active.last_name = Set(changes.last_name);
        active.email = Set(changes.email.clone());
        active.email_verified = Set(changes.email_verified);
        active.phone_mobile = Set(changes.phone_mobile);
        active.phone_mobile_verified = Set(changes.phone_mobile_verified);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| base::email_taken(e, Some(&changes.email)))?;
        Ok(Admin::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<AdminEntity, _>(&self.db, id).await
    }

    async fn record_login(&self, id: Uuid) -> AppResult<()> {
        let result = AdminEntity::update_many()
            .col_expr(admin::Column::LastLoginDate, Expr::value(chrono::Utc::now()))
            .filter(admin::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
