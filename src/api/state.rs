//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AdminService, BusinessService, CertificateService, ChangelogService, EmployeeService,
    EndUserService, ServiceContainer, Services,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<dyn AdminService>,
    pub business_service: Arc<dyn BusinessService>,
    pub certificate_service: Arc<dyn CertificateService>,
    pub changelog_service: Arc<dyn ChangelogService>,
    pub employee_service: Arc<dyn EmployeeService>,
    pub end_user_service: Arc<dyn EndUserService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire every service onto one database connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(&services, database)
    }

    /// Build state from any service container (mocked ones included).
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            admin_service: services.admins(),
            business_service: services.businesses(),
            certificate_service: services.certificates(),
            changelog_service: services.changelogs(),
            employee_service: services.employees(),
            end_user_service: services.end_users(),
            database,
        }
    }
}
