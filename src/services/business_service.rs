//! Business service - businesses and the records hanging off them.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Business, BusinessChanges, Certificate, Employee, NewBusiness};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Business service trait for dependency injection.
#[async_trait]
pub trait BusinessService: Send + Sync {
    async fn list_businesses(&self) -> AppResult<Vec<Business>>;

    async fn get_business(&self, id: Uuid) -> AppResult<Business>;

    async fn create_business(&self, input: NewBusiness) -> AppResult<Business>;

    async fn update_business(&self, id: Uuid, changes: BusinessChanges) -> AppResult<Business>;

    /// Delete a business; its employees and certificates go with it
    async fn delete_business(&self, id: Uuid) -> AppResult<()>;

    /// Employees of an existing business
    async fn list_employees(&self, id: Uuid) -> AppResult<Vec<Employee>>;

    /// Certificates issued by an existing business
    async fn list_certificates(&self, id: Uuid) -> AppResult<Vec<Certificate>>;
}

/// Concrete implementation of BusinessService using Unit of Work.
pub struct BusinessManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BusinessManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BusinessService for BusinessManager<U> {
    async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        self.uow.businesses().list().await
    }

    async fn get_business(&self, id: Uuid) -> AppResult<Business> {
        self.uow.businesses().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_business(&self, input: NewBusiness) -> AppResult<Business> {
        let business = self.uow.businesses().create(input).await?;
        tracing::info!(business_id = %business.id, title = %business.title, "Business created");
        Ok(business)
    }

    async fn update_business(&self, id: Uuid, changes: BusinessChanges) -> AppResult<Business> {
        self.uow.businesses().update(id, changes).await
    }

    async fn delete_business(&self, id: Uuid) -> AppResult<()> {
        self.uow.businesses().delete(id).await?;
        tracing::info!(business_id = %id, "Business deleted with its employees and certificates");
        Ok(())
    }

    async fn list_employees(&self, id: Uuid) -> AppResult<Vec<Employee>> {
        let business = self.get_business(id).await?;
        self.uow.employees().list_by_business(business.id).await
    }

    async fn list_certificates(&self, id: Uuid) -> AppResult<Vec<Certificate>> {
        let business = self.get_business(id).await?;
        self.uow.certificates().list_by_business(business.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockBusinessRepository, MockEmployeeRepository};
    use crate::services::test_support::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn acme(id: Uuid) -> Business {
        Business {
            id,
            title: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            phone: Some("555-0100".to_string()),
            created_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_business_not_found() {
        let mut repo = MockBusinessRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork {
            businesses: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let result = BusinessManager::new(Arc::new(uow))
            .get_business(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_missing_business_propagates_not_found() {
        let mut repo = MockBusinessRepository::new();
        repo.expect_update().returning(|_, _| Err(AppError::NotFound));

        let uow = TestUnitOfWork {
            businesses: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let changes = BusinessChanges {
            title: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            phone: None,
        };
        let result = BusinessManager::new(Arc::new(uow))
            .update_business(Uuid::new_v4(), changes)
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_employees_of_missing_business() {
        let mut businesses = MockBusinessRepository::new();
        businesses.expect_find_by_id().returning(|_| Ok(None));
        let mut employees = MockEmployeeRepository::new();
        employees.expect_list_by_business().never();

        let uow = TestUnitOfWork {
            businesses: Arc::new(businesses),
            employees: Arc::new(employees),
            ..TestUnitOfWork::default()
        };
        let result = BusinessManager::new(Arc::new(uow))
            .list_employees(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_employees_of_business() {
        let id = Uuid::new_v4();
        let mut businesses = MockBusinessRepository::new();
        businesses
            .expect_find_by_id()
            .with(eq(id))
            .returning(|id| Ok(Some(acme(id))));
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_list_by_business()
            .with(eq(id))
            .returning(|_| Ok(vec![]));

        let uow = TestUnitOfWork {
            businesses: Arc::new(businesses),
            employees: Arc::new(employees),
            ..TestUnitOfWork::default()
        };
        let result = BusinessManager::new(Arc::new(uow)).list_employees(id).await;

        assert!(result.unwrap().is_empty());
    }
}
