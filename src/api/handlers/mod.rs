//! HTTP request handlers.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

pub mod admin_handler;
pub mod business_handler;
pub mod certificate_handler;
pub mod changelog_handler;
pub mod employee_handler;
pub mod end_user_handler;

pub use admin_handler::admin_routes;
pub use business_handler::business_routes;
pub use certificate_handler::certificate_routes;
pub use changelog_handler::changelog_routes;
pub use employee_handler::employee_routes;
pub use end_user_handler::end_user_routes;

/// Email and password login request, shared by every account type
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@qardless.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret")]
    pub password: String,
}
