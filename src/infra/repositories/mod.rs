//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod admin_repository;
mod base;
mod business_repository;
pub(crate) mod certificate_repository;
mod changelog_repository;
pub(crate) mod employee_repository;
mod end_user_repository;
pub(crate) mod entities;

pub use admin_repository::{AdminRepository, AdminStore};
pub use business_repository::{BusinessRepository, BusinessStore};
pub use certificate_repository::{CertificateRepository, CertificateStore};
pub use changelog_repository::{ChangelogRepository, ChangelogStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use end_user_repository::{EndUserRepository, EndUserStore};

pub(crate) use base::exists;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admin_repository::MockAdminRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use business_repository::MockBusinessRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use certificate_repository::MockCertificateRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use changelog_repository::MockChangelogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use end_user_repository::MockEndUserRepository;
