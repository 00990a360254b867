//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits; `Services` wires the concrete
//! managers to one shared Unit of Work.

use std::sync::Arc;

use super::{
    AdminManager, AdminService, BusinessManager, BusinessService, CertificateManager,
    CertificateService, ChangelogManager, ChangelogService, EmployeeManager, EmployeeService,
    EndUserManager, EndUserService,
};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn admins(&self) -> Arc<dyn AdminService>;

    fn businesses(&self) -> Arc<dyn BusinessService>;

    fn certificates(&self) -> Arc<dyn CertificateService>;

    fn changelogs(&self) -> Arc<dyn ChangelogService>;

    fn employees(&self) -> Arc<dyn EmployeeService>;

    fn end_users(&self) -> Arc<dyn EndUserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    admin_service: Arc<dyn AdminService>,
    business_service: Arc<dyn BusinessService>,
    certificate_service: Arc<dyn CertificateService>,
    changelog_service: Arc<dyn ChangelogService>,
    employee_service: Arc<dyn EmployeeService>,
    end_user_service: Arc<dyn EndUserService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            admin_service: Arc::new(AdminManager::new(uow.clone())),
            business_service: Arc::new(BusinessManager::new(uow.clone())),
            certificate_service: Arc::new(CertificateManager::new(uow.clone())),
            changelog_service: Arc::new(ChangelogManager::new(uow.clone())),
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            end_user_service: Arc::new(EndUserManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn admins(&self) -> Arc<dyn AdminService> {
        self.admin_service.clone()
    }

    fn businesses(&self) -> Arc<dyn BusinessService> {
        self.business_service.clone()
    }

    fn certificates(&self) -> Arc<dyn CertificateService> {
        self.certificate_service.clone()
    }

    fn changelogs(&self) -> Arc<dyn ChangelogService> {
        self.changelog_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn end_users(&self) -> Arc<dyn EndUserService> {
        self.end_user_service.clone()
    }
}
