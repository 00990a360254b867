//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod admin_service;
mod business_service;
mod certificate_service;
mod changelog_service;
pub mod container;
mod employee_service;
mod end_user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use admin_service::{AdminManager, AdminRegistration, AdminService};
pub use business_service::{BusinessManager, BusinessService};
pub use certificate_service::{CertificateManager, CertificateService};
pub use changelog_service::{ChangelogManager, ChangelogService};
pub use employee_service::{EmployeeManager, EmployeeRegistration, EmployeeService};
pub use end_user_service::{EndUserManager, EndUserRegistration, EndUserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::errors::{AppError, AppResult};
    use crate::infra::{
        AdminRepository, BusinessRepository, CertificateRepository, ChangelogRepository,
        EmployeeRepository, EndUserRepository, MockAdminRepository, MockBusinessRepository,
        MockCertificateRepository, MockChangelogRepository, MockEmployeeRepository,
        MockEndUserRepository, TransactionContext, TxFuture, UnitOfWork,
    };

    /// Unit of Work over mocked repositories. Repositories left at their
    /// default have no expectations and panic when called.
    pub(crate) struct TestUnitOfWork {
        pub admins: Arc<dyn AdminRepository>,
        pub businesses: Arc<dyn BusinessRepository>,
        pub certificates: Arc<dyn CertificateRepository>,
        pub changelogs: Arc<dyn ChangelogRepository>,
        pub employees: Arc<dyn EmployeeRepository>,
        pub end_users: Arc<dyn EndUserRepository>,
    }

    impl Default for TestUnitOfWork {
        fn default() -> Self {
            Self {
                admins: Arc::new(MockAdminRepository::new()),
                businesses: Arc::new(MockBusinessRepository::new()),
                certificates: Arc::new(MockCertificateRepository::new()),
                changelogs: Arc::new(MockChangelogRepository::new()),
                employees: Arc::new(MockEmployeeRepository::new()),
                end_users: Arc::new(MockEndUserRepository::new()),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn admins(&self) -> Arc<dyn AdminRepository> {
            self.admins.clone()
        }

        fn businesses(&self) -> Arc<dyn BusinessRepository> {
            self.businesses.clone()
        }

        fn certificates(&self) -> Arc<dyn CertificateRepository> {
            self.certificates.clone()
        }

        fn changelogs(&self) -> Arc<dyn ChangelogRepository> {
            self.changelogs.clone()
        }

        fn employees(&self) -> Arc<dyn EmployeeRepository> {
            self.employees.clone()
        }

        fn end_users(&self) -> Arc<dyn EndUserRepository> {
            self.end_users.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }
}
