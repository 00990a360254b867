//! Business handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::ROUTE_BUSINESSES;
use crate::domain::{
    BusinessChanges, BusinessPartialResponse, BusinessResponse, CertificateResponse,
    EmployeeResponse, NewBusiness,
};
use crate::errors::{AppResult, ResultExt};
use crate::types::{Accepted, Created, Deleted};

/// Business create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Acme")]
    pub title: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@acme.com")]
    pub email: String,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

/// Create business routes
pub fn business_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_businesses).post(create_business))
        .route(
            "/:id",
            get(get_business).put(update_business).delete(delete_business),
        )
        .route("/:id/employees", get(list_business_employees))
        .route("/:id/certificates", get(list_business_certificates))
}

/// List all businesses
#[utoipa::path(
    get,
    path = "/businesses",
    tag = "Businesses",
    responses((status = 200, description = "All businesses", body = Vec<BusinessResponse>))
)]
pub async fn list_businesses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BusinessResponse>>> {
    let businesses = state.business_service.list_businesses().await?;
    Ok(Json(businesses.into_iter().map(BusinessResponse::from).collect()))
}

/// Get business by ID
#[utoipa::path(
    get,
    path = "/businesses/{id}",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business", body = BusinessResponse),
        (status = 404, description = "Business not found")
    )
)]
pub async fn get_business(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<BusinessResponse>> {
    let business = state.business_service.get_business(id).await?;
    Ok(Json(BusinessResponse::from(business)))
}

/// Create a business
#[utoipa::path(
    post,
    path = "/businesses",
    tag = "Businesses",
    request_body = BusinessRequest,
    responses(
        (status = 201, description = "Business created", body = BusinessPartialResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_business(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BusinessRequest>,
) -> AppResult<Created<BusinessPartialResponse>> {
    let business = state
        .business_service
        .create_business(NewBusiness {
            title: payload.title,
            email: payload.email,
            phone: payload.phone,
        })
        .await?;

    Ok(Created::at(
        ROUTE_BUSINESSES,
        business.id,
        BusinessPartialResponse::from(business),
    ))
}

/// Update a business
#[utoipa::path(
    put,
    path = "/businesses/{id}",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "Business ID")),
    request_body = BusinessRequest,
    responses(
        (status = 202, description = "Business updated", body = BusinessResponse),
        (status = 400, description = "Validation error or business does not exist")
    )
)]
pub async fn update_business(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<BusinessRequest>,
) -> AppResult<Accepted<BusinessResponse>> {
    let changes = BusinessChanges {
        title: payload.title,
        email: payload.email,
        phone: payload.phone,
    };

    let business = state
        .business_service
        .update_business(id, changes)
        .await
        .or_bad_request("Business")?;

    Ok(Accepted(BusinessResponse::from(business)))
}

/// Delete a business with its employees and certificates
#[utoipa::path(
    delete,
    path = "/businesses/{id}",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "Business ID")),
    responses(
        (status = 202, description = "Business deleted"),
        (status = 400, description = "Business does not exist")
    )
)]
pub async fn delete_business(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .business_service
        .delete_business(id)
        .await
        .or_bad_request("Business")?;

    Ok(Deleted)
}

/// List the employees of a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/employees",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Employees of the business", body = Vec<EmployeeResponse>),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_business_employees(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.business_service.list_employees(id).await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// List the certificates issued by a business
#[utoipa::path(
    get,
    path = "/businesses/{id}/certificates",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Certificates issued by the business", body = Vec<CertificateResponse>),
        (status = 404, description = "Business not found")
    )
)]
pub async fn list_business_certificates(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<Vec<CertificateResponse>>> {
    let certificates = state.business_service.list_certificates(id).await?;
    Ok(Json(
        certificates.into_iter().map(CertificateResponse::from).collect(),
    ))
}
