//! End user handlers.

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
use crate::config::ROUTE_END_USERS;
use crate::domain::{
    CertificateResponse, EndUserChanges, EndUserPartialResponse, EndUserResponse, LoginStatus,
};
use crate::errors::{AppResult, ResultExt};
use crate::services::EndUserRegistration;
use crate::types::{Accepted, Created, Deleted};

/// End user registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEndUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Sam Holder")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "sam@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub phone_mobile: Option<String>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
}

/// End user update request. Every mutable field is overwritten.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEndUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
}

/// Create end user routes
pub fn end_user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_end_users).post(create_end_user))
        .route("/login", post(login))
        .route(
            "/:id",
            get(get_end_user).put(update_end_user).delete(delete_end_user),
        )
        .route("/:id/certificates", get(list_end_user_certificates))
}

/// List all end users
#[utoipa::path(
    get,
    path = "/endusers",
    tag = "End users",
    responses((status = 200, description = "All end users", body = Vec<EndUserResponse>))
)]
pub async fn list_end_users(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EndUserResponse>>> {
    let end_users = state.end_user_service.list_end_users().await?;
    Ok(Json(end_users.into_iter().map(EndUserResponse::from).collect()))
}

/// Get end user by ID
#[utoipa::path(
    get,
    path = "/endusers/{id}",
    tag = "End users",
    params(("id" = Uuid, Path, description = "End user ID")),
    responses(
        (status = 200, description = "End user", body = EndUserResponse),
        (status = 404, description = "End user not found")
    )
)]
pub async fn get_end_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<EndUserResponse>> {
    let end_user = state.end_user_service.get_end_user(id).await?;
    Ok(Json(EndUserResponse::from(end_user)))
}

/// Register an end user
#[utoipa::path(
    post,
    path = "/endusers",
    tag = "End users",
    request_body = CreateEndUserRequest,
    responses(
        (status = 201, description = "End user registered", body = EndUserPartialResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_end_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEndUserRequest>,
) -> AppResult<Created<EndUserPartialResponse>> {
    let end_user = state
        .end_user_service
        .register(EndUserRegistration {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            phone_mobile: payload.phone_mobile,
            phone_home: payload.phone_home,
            address_code: payload.address_code,
            address_detailed: payload.address_detailed,
        })
        .await?;

    Ok(Created::at(
        ROUTE_END_USERS,
        end_user.id,
        EndUserPartialResponse::from(end_user),
    ))
}

/// Update an end user
#[utoipa::path(
    put,
    path = "/endusers/{id}",
    tag = "End users",
    params(("id" = Uuid, Path, description = "End user ID")),
    request_body = UpdateEndUserRequest,
    responses(
        (status = 202, description = "End user updated", body = EndUserResponse),
        (status = 400, description = "Validation error or end user does not exist")
    )
)]
pub async fn update_end_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEndUserRequest>,
) -> AppResult<Accepted<EndUserResponse>> {
    let changes = EndUserChanges {
        name: payload.name,
        email: payload.email,
        email_verified: payload.email_verified,
        phone_mobile: payload.phone_mobile,
        phone_mobile_verified: payload.phone_mobile_verified,
        phone_home: payload.phone_home,
        address_code: payload.address_code,
        address_detailed: payload.address_detailed,
    };

    let end_user = state
        .end_user_service
        .update_end_user(id, changes)
        .await
        .or_bad_request("End user")?;

    Ok(Accepted(EndUserResponse::from(end_user)))
}

/// Delete an end user with their certificates
#[utoipa::path(
    delete,
    path = "/endusers/{id}",
    tag = "End users",
    params(("id" = Uuid, Path, description = "End user ID")),
    responses(
        (status = 202, description = "End user deleted"),
        (status = 400, description = "End user does not exist")
    )
)]
pub async fn delete_end_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .end_user_service
        .delete_end_user(id)
        .await
        .or_bad_request("End user")?;

    Ok(Deleted)
}

/// List the certificates held by an end user
#[utoipa::path(
    get,
    path = "/endusers/{id}/certificates",
    tag = "End users",
    params(("id" = Uuid, Path, description = "End user ID")),
    responses(
        (status = 200, description = "Certificates held", body = Vec<CertificateResponse>),
        (status = 404, description = "End user not found")
    )
)]
pub async fn list_end_user_certificates(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Vec<CertificateResponse>>> {
    let certificates = state.end_user_service.list_certificates(id).await?;
    Ok(Json(
        certificates.into_iter().map(CertificateResponse::from).collect(),
    ))
}

/// End user login
#[utoipa::path(
    post,
    path = "/endusers/login",
    tag = "End users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginStatus),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginStatus>> {
    let status = state
        .end_user_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(status))
}
