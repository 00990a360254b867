//! Domain layer - Core business entities
//!
//! Plain records for each entity, the inputs used to create and update
//! them, and the response views handed back to clients.

pub mod admin;
pub mod business;
pub mod certificate;
pub mod changelog;
pub mod employee;
pub mod end_user;
pub mod login;
pub mod password;

pub use admin::{Admin, AdminChanges, AdminPartialResponse, AdminResponse, NewAdmin};
pub use business::{
    Business, BusinessChanges, BusinessPartialResponse, BusinessResponse, NewBusiness,
};
pub use certificate::{
    Certificate, CertificateChanges, CertificatePartialResponse, CertificateResponse,
    NewCertificate,
};
pub use changelog::{
    Changelog, ChangelogChanges, ChangelogPartialResponse, ChangelogResponse, NewChangelog,
};
pub use employee::{
    Employee, EmployeeChanges, EmployeePartialResponse, EmployeeResponse, NewEmployee,
};
pub use end_user::{EndUser, EndUserChanges, EndUserPartialResponse, EndUserResponse, NewEndUser};
pub use login::LoginStatus;
pub use password::{hash_password, Password};
