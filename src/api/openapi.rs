//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    admin_handler, business_handler, certificate_handler, changelog_handler, employee_handler,
    end_user_handler, LoginRequest,
};
use crate::domain::{
    AdminPartialResponse, AdminResponse, BusinessPartialResponse, BusinessResponse,
    CertificatePartialResponse, CertificateResponse, ChangelogPartialResponse, ChangelogResponse,
    EmployeePartialResponse, EmployeeResponse, EndUserPartialResponse, EndUserResponse,
    LoginStatus,
};

/// OpenAPI documentation for the Qardless API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Qardless API",
        version = "0.1.0",
        description = "Certificate issuance backend: businesses issue certificates to end users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        admin_handler::list_admins,
        admin_handler::get_admin,
        admin_handler::create_admin,
        admin_handler::update_admin,
        admin_handler::delete_admin,
        admin_handler::login,
        admin_handler::logout,
        business_handler::list_businesses,
        business_handler::get_business,
        business_handler::create_business,
        business_handler::update_business,
        business_handler::delete_business,
        business_handler::list_business_employees,
        business_handler::list_business_certificates,
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
        employee_handler::login,
        end_user_handler::list_end_users,
        end_user_handler::get_end_user,
        end_user_handler::create_end_user,
        end_user_handler::update_end_user,
        end_user_handler::delete_end_user,
        end_user_handler::list_end_user_certificates,
        end_user_handler::login,
        certificate_handler::list_certificates,
        certificate_handler::get_certificate,
        certificate_handler::create_certificate,
        certificate_handler::update_certificate,
        certificate_handler::delete_certificate,
        changelog_handler::list_changelogs,
        changelog_handler::get_changelog,
        changelog_handler::create_changelog,
        changelog_handler::update_changelog,
        changelog_handler::mark_changelog_read,
        changelog_handler::delete_changelog,
    ),
    components(
        schemas(
            LoginRequest,
            LoginStatus,
            AdminResponse,
            AdminPartialResponse,
            admin_handler::CreateAdminRequest,
            admin_handler::UpdateAdminRequest,
            admin_handler::LogoutRequest,
            BusinessResponse,
            BusinessPartialResponse,
            business_handler::BusinessRequest,
            EmployeeResponse,
            EmployeePartialResponse,
            employee_handler::CreateEmployeeRequest,
            employee_handler::UpdateEmployeeRequest,
            EndUserResponse,
            EndUserPartialResponse,
            end_user_handler::CreateEndUserRequest,
            end_user_handler::UpdateEndUserRequest,
            CertificateResponse,
            CertificatePartialResponse,
            certificate_handler::CertificateRequest,
            ChangelogResponse,
            ChangelogPartialResponse,
            changelog_handler::CreateChangelogRequest,
            changelog_handler::UpdateChangelogRequest,
        )
    ),
    tags(
        (name = "Admins", description = "Platform administrators"),
        (name = "Businesses", description = "Certificate issuing businesses"),
        (name = "Employees", description = "Staff of a business"),
        (name = "End users", description = "Certificate holders"),
        (name = "Certificates", description = "Issued certificates"),
        (name = "Changelogs", description = "Release notes and notices")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/admins",
            "/businesses/{id}/employees",
            "/employees/login",
            "/endusers/{id}/certificates",
            "/certificates/{id}",
            "/changelogs/{id}/read",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }
}
