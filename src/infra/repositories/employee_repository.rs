//! Employee repository implementation.
//!
//! Writes go through `insert` and `apply_changes`, which are also used by the
//! transaction-bound repository so the business lookup and the write share a
//! transaction.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::base;
use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeChanges, NewEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List every employee
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// List the employees of one business
    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<Employee>>;

    /// Find employee by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// Find employee by email address (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Create a new employee. The business is expected to exist.
    async fn create(&self, input: NewEmployee) -> AppResult<Employee>;

    /// Overwrite the mutable fields of an employee
    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Employee>;

    /// Delete employee by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Stamp the last login time
    async fn record_login(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        base::find_all::<EmployeeEntity, _, _>(&self.db).await
    }

    async fn list_by_business(&self, business_id: Uuid) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::BusinessId.eq(business_id))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        base::find_one::<EmployeeEntity, _, _>(&self.db, id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Employee::from))
    }

    async fn create(&self, input: NewEmployee) -> AppResult<Employee> {
        insert(&self.db, input).await
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Employee> {
        apply_changes(&self.db, id, changes).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<EmployeeEntity, _>(&self.db, id).await
    }

    async fn record_login(&self, id: Uuid) -> AppResult<()> {
        let result = EmployeeEntity::update_many()
            .col_expr(employee::Column::LastLoginDate, Expr::value(chrono::Utc::now()))
            .filter(employee::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

pub(crate) async fn insert<C: ConnectionTrait>(db: &C, input: NewEmployee) -> AppResult<Employee> {
    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email.clone()),
        email_verified: Set(false),
        password_hash: Set(input.password_hash),
        phone_mobile: Set(input.phone_mobile),
        phone_mobile_verified: Set(None),
        privilege_level: Set(input.privilege_level),
        created_date: Set(now),
        last_login_date: Set(now),
        business_id: Set(input.business_id),
    };

    let model = active_model
        .insert(db)
        .await
        .map_err(|e| base::email_taken(e, input.email.as_deref()))?;
    Ok(Employee::from(model))
}

pub(crate) async fn apply_changes<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    changes: EmployeeChanges,
) -> AppResult<Employee> {
    let existing = base::find_model::<EmployeeEntity, _>(db, id).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(changes.name);
    active.email = Set(changes.email.clone());
    active.email_verified = Set(changes.email_verified);
    active.phone_mobile = Set(changes.phone_mobile);
    active.phone_mobile_verified = Set(changes.phone_mobile_verified);
    active.privilege_level = Set(changes.privilege_level);
    active.business_id = Set(changes.business_id);

    let model = active
        .update(db)
        .await
        .map_err(|e| base::email_taken(e, changes.email.as_deref()))?;
    Ok(Employee::from(model))
}
