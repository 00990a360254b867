//! Employee service - staff accounts belonging to a business.
//!
//! Writes that reference a business check it inside the same transaction
//! as the insert or update.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeChanges, LoginStatus, NewEmployee, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Employee registration input with an optional plain text password
#[derive(Debug, Clone)]
pub struct EmployeeRegistration {
    pub name: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_mobile: Option<String>,
    pub privilege_level: i32,
    pub business_id: Uuid,
}

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// Create an employee under an existing business
    async fn create_employee(&self, registration: EmployeeRegistration) -> AppResult<Employee>;

    async fn update_employee(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Employee>;

    async fn delete_employee(&self, id: Uuid) -> AppResult<()>;

    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn missing_business(id: Uuid) -> AppError {
    AppError::invalid_argument(format!("Business {} does not exist", id))
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, registration: EmployeeRegistration) -> AppResult<Employee> {
        let input = NewEmployee {
            name: registration.name,
            email: registration.email,
            password_hash: registration
                .password
                .map(|plain| Password::new(&plain).into_string()),
            phone_mobile: registration.phone_mobile,
            privilege_level: registration.privilege_level,
            business_id: registration.business_id,
        };

        let employee = with_transaction!(self.uow, |ctx| {
            if !ctx.businesses().exists(input.business_id).await? {
                return Err(missing_business(input.business_id));
            }
            ctx.employees().create(input).await
        })?;

        tracing::info!(
            employee_id = %employee.id,
            business_id = %employee.business_id,
            "Employee created"
        );
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Employee> {
        with_transaction!(self.uow, |ctx| {
            if !ctx.businesses().exists(changes.business_id).await? {
                return Err(missing_business(changes.business_id));
            }
            ctx.employees().update(id, changes).await
        })
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        self.uow.employees().delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginStatus> {
        let employee = self
            .uow
            .employees()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Employees created without a password cannot log in.
        let verified = employee
            .password_hash
            .map(|hash| Password::from_hash(hash).verify(&password))
            .unwrap_or(false);
        if !verified {
            return Err(AppError::InvalidCredentials);
        }

        self.uow.employees().record_login(employee.id).await?;
        tracing::info!(employee_id = %employee.id, "Employee logged in");
        Ok(LoginStatus::logged_in(employee.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockEmployeeRepository;
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;

    fn employee(password_hash: Option<String>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Jo".to_string(),
            email: Some("jo@acme.com".to_string()),
            email_verified: false,
            password_hash,
            phone_mobile: None,
            phone_mobile_verified: None,
            privilege_level: 0,
            created_date: Utc::now(),
            last_login_date: Utc::now(),
            business_id: Uuid::new_v4(),
        }
    }

    fn service(repo: MockEmployeeRepository) -> EmployeeManager<TestUnitOfWork> {
        let uow = TestUnitOfWork {
            employees: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        EmployeeManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_login_without_password_is_rejected() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(employee(None))));
        repo.expect_record_login().never();

        let result = service(repo)
            .login("jo@acme.com".to_string(), "anything".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let stored = employee(Some(crate::domain::hash_password("pw")));
        let id = stored.id;
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_record_login().times(1).returning(|_| Ok(()));

        let status = service(repo)
            .login("jo@acme.com".to_string(), "pw".to_string())
            .await
            .unwrap();

        assert_eq!(status, LoginStatus::logged_in(id));
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_employee(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
