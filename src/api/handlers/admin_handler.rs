//! Admin handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::LoginRequest;
use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::ROUTE_ADMINS;
use crate::domain::{AdminChanges, AdminPartialResponse, AdminResponse, LoginStatus};
use crate::errors::{AppResult, ResultExt};
use crate::services::AdminRegistration;
use crate::types::{Accepted, Created, Deleted};

/// Admin registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@qardless.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub phone_mobile: Option<String>,
}

/// Admin update request. Every mutable field is overwritten.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    #[serde(default)]
    pub phone_mobile_verified: bool,
}

/// Admin logout request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LogoutRequest {
    pub id: Uuid,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins).post(create_admin))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route(
            "/:id",
            get(get_admin).put(update_admin).delete(delete_admin),
        )
}

/// List all admins
#[utoipa::path(
    get,
    path = "/admins",
    tag = "Admins",
    responses(
        (status = 200, description = "All admins", body = Vec<AdminResponse>)
    )
)]
pub async fn list_admins(State(state): State<AppState>) -> AppResult<Json<Vec<AdminResponse>>> {
    let admins = state.admin_service.list_admins().await?;
    Ok(Json(admins.into_iter().map(AdminResponse::from).collect()))
}

/// Get admin by ID
#[utoipa::path(
    get,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin", body = AdminResponse),
        (status = 404, description = "Admin not found")
    )
)]
pub async fn get_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<AdminResponse>> {
    let admin = state.admin_service.get_admin(id).await?;
    Ok(Json(AdminResponse::from(admin)))
}

/// Register a new admin
#[utoipa::path(
    post,
    path = "/admins",
    tag = "Admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 201, description = "Admin registered", body = AdminPartialResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAdminRequest>,
) -> AppResult<Created<AdminPartialResponse>> {
    let admin = state
        .admin_service
        .register(AdminRegistration {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            phone_mobile: payload.phone_mobile,
        })
        .await?;

    Ok(Created::at(ROUTE_ADMINS, admin.id, AdminPartialResponse::from(admin)))
}

/// Update an admin
#[utoipa::path(
    put,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    request_body = UpdateAdminRequest,
    responses(
        (status = 202, description = "Admin updated", body = AdminResponse),
        (status = 400, description = "Validation error or admin does not exist")
    )
)]
pub async fn update_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAdminRequest>,
) -> AppResult<Accepted<AdminResponse>> {
    let changes = AdminChanges {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        email_verified: payload.email_verified,
        phone_mobile: payload.phone_mobile,
        phone_mobile_verified: payload.phone_mobile_verified,
    };

    let admin = state
        .admin_service
        .update_admin(id, changes)
        .await
        .or_bad_request("Admin")?;

    Ok(Accepted(AdminResponse::from(admin)))
}

/// Delete an admin
#[utoipa::path(
    delete,
    path = "/admins/{id}",
    tag = "Admins",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 202, description = "Admin deleted"),
        (status = 400, description = "Admin does not exist")
    )
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .admin_service
        .delete_admin(id)
        .await
        .or_bad_request("Admin")?;

    Ok(Deleted)
}

/// Admin login
#[utoipa::path(
    post,
    path = "/admins/login",
    tag = "Admins",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginStatus),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginStatus>> {
    let status = state
        .admin_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(status))
}

/// Admin logout
#[utoipa::path(
    post,
    path = "/admins/logout",
    tag = "Admins",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out", body = LoginStatus),
        (status = 400, description = "Admin does not exist")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LogoutRequest>,
) -> AppResult<Json<LoginStatus>> {
    let status = state
        .admin_service
        .logout(payload.id)
        .await
        .or_bad_request("Admin")?;

    Ok(Json(status))
}
