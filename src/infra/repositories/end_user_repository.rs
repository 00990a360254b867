//! End user repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::base;
use super::entities::end_user::{self, ActiveModel, Entity as EndUserEntity};
use crate::domain::{EndUser, EndUserChanges, NewEndUser};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// End user repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EndUserRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<EndUser>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EndUser>>;

    /// Find end user by email address (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<EndUser>>;

    async fn create(&self, input: NewEndUser) -> AppResult<EndUser>;

    async fn update(&self, id: Uuid, changes: EndUserChanges) -> AppResult<EndUser>;

    /// Delete an end user together with their certificates
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Stamp the last login time
    async fn record_login(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EndUserRepository
pub struct EndUserStore {
    db: DatabaseConnection,
}

impl EndUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EndUserRepository for EndUserStore {
    async fn list(&self) -> AppResult<Vec<EndUser>> {
        base::find_all::<EndUserEntity, _, _>(&self.db).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EndUser>> {
        base::find_one::<EndUserEntity, _, _>(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<EndUser>> {
        let result = EndUserEntity::find()
            .filter(end_user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(EndUser::from))
    }

    async fn create(&self, input: NewEndUser) -> AppResult<EndUser> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email.clone()),
            email_verified: Set(false),
            password_hash: Set(input.password_hash),
            phone_mobile: Set(input.phone_mobile),
            phone_mobile_verified: Set(None),
            phone_home: Set(input.phone_home),
            address_code: Set(input.address_code),
            address_detailed: Set(input.address_detailed),
            created_date: Set(now),
            last_login_date: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| base::email_taken(e, Some(&input.email)))?;
        Ok(EndUser::from(model))
    }

    async fn update(&self, id: Uuid, changes: EndUserChanges) -> AppResult<EndUser> {
        let existing = base::find_model::<EndUserEntity, _>(&self.db, id).await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.email = Set(changes.email.clone());
        active.email_verified = Set(changes.email_verified);
        active.phone_mobile = Set(changes.phone_mobile);
        active.phone_mobile_verified = Set(changes.phone_mobile_verified);
        active.phone_home = Set(changes.phone_home);
        active.address_code = Set(changes.address_code);
        active.address_detailed = Set(changes.address_detailed);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| base::email_taken(e, Some(&changes.email)))?;
        Ok(EndUser::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<EndUserEntity, _>(&self.db, id).await
    }

    async fn record_login(&self, id: Uuid) -> AppResult<()> {
        let result = EndUserEntity::update_many()
            .col_expr(end_user::Column::LastLoginDate, Expr::value(chrono::Utc::now()))
            .filter(end_user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
