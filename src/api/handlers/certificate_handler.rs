//! Certificate handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::ROUTE_CERTIFICATES;
use crate::domain::{CertificatePartialResponse, CertificateResponse, NewCertificate};
use crate::errors::{AppResult, ResultExt};
use crate::types::{Accepted, Created, Deleted};

/// Certificate create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_expiry", skip_on_field_errors = false))]
pub struct CertificateRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "First Aid at Work")]
    pub title: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    #[schema(example = "FA-2024-0001")]
    pub serial_number: String,
    pub course_title: Option<String>,
    pub course_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "PDF location is required"))]
    #[schema(example = "https://files.qardless.com/fa-2024-0001.pdf")]
    pub pdf_uri: String,
    #[validate(length(min = 1, message = "QR code location is required"))]
    #[schema(example = "https://files.qardless.com/fa-2024-0001.png")]
    pub qr_code_uri: String,
    #[serde(default)]
    pub expires: bool,
    pub expiry_date: Option<DateTime<Utc>>,
    pub business_id: Uuid,
    pub end_user_id: Uuid,
}

fn validate_expiry(request: &CertificateRequest) -> Result<(), ValidationError> {
    if request.expires && request.expiry_date.is_none() {
        let mut error = ValidationError::new("expiry_date");
        error.message = Some("Expiring certificates need an expiry date".into());
        return Err(error);
    }
    Ok(())
}

impl From<CertificateRequest> for NewCertificate {
    fn from(request: CertificateRequest) -> Self {
        NewCertificate {
            title: request.title,
            serial_number: request.serial_number,
            course_title: request.course_title,
            course_date: request.course_date,
            pdf_uri: request.pdf_uri,
            qr_code_uri: request.qr_code_uri,
            expires: request.expires,
            expiry_date: request.expiry_date,
            business_id: request.business_id,
            end_user_id: request.end_user_id,
        }
    }
}

/// Create certificate routes
pub fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_certificates).post(create_certificate))
        .route(
            "/:id",
            get(get_certificate)
                .put(update_certificate)
                .delete(delete_certificate),
        )
}

/// List all certificates
#[utoipa::path(
    get,
    path = "/certificates",
    tag = "Certificates",
    responses((status = 200, description = "All certificates", body = Vec<CertificateResponse>))
)]
pub async fn list_certificates(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CertificateResponse>>> {
    let certificates = state.certificate_service.list_certificates().await?;
    Ok(Json(
        certificates.into_iter().map(CertificateResponse::from).collect(),
    ))
}

/// Get certificate by ID
#[utoipa::path(
    get,
    path = "/certificates/{id}",
    tag = "Certificates",
    params(("id" = Uuid, Path, description = "Certificate ID")),
    responses(
        (status = 200, description = "Certificate", body = CertificateResponse),
        (status = 404, description = "Certificate not found")
    )
)]
pub async fn get_certificate(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<CertificateResponse>> {
    let certificate = state.certificate_service.get_certificate(id).await?;
    Ok(Json(CertificateResponse::from(certificate)))
}

/// Issue a certificate
#[utoipa::path(
    post,
    path = "/certificates",
    tag = "Certificates",
    request_body = CertificateRequest,
    responses(
        (status = 201, description = "Certificate issued", body = CertificatePartialResponse),
        (status = 400, description = "Validation error, business or end user does not exist")
    )
)]
pub async fn create_certificate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CertificateRequest>,
) -> AppResult<Created<CertificatePartialResponse>> {
    let certificate = state
        .certificate_service
        .issue_certificate(payload.into())
        .await?;

    Ok(Created::at(
        ROUTE_CERTIFICATES,
        certificate.id,
        CertificatePartialResponse::from(certificate),
    ))
}

/// Update a certificate
#[utoipa::path(
    put,
    path = "/certificates/{id}",
    tag = "Certificates",
    params(("id" = Uuid, Path, description = "Certificate ID")),
    request_body = CertificateRequest,
    responses(
        (status = 202, description = "Certificate updated", body = CertificateResponse),
        (status = 400, description = "Validation error or a referenced row does not exist")
    )
)]
pub async fn update_certificate(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<CertificateRequest>,
) -> AppResult<Accepted<CertificateResponse>> {
    let certificate = state
        .certificate_service
        .update_certificate(id, payload.into())
        .await
        .or_bad_request("Certificate")?;

    Ok(Accepted(CertificateResponse::from(certificate)))
}

/// Delete a certificate
#[utoipa::path(
    delete,
    path = "/certificates/{id}",
    tag = "Certificates",
    params(("id" = Uuid, Path, description = "Certificate ID")),
    responses(
        (status = 202, description = "Certificate deleted"),
        (status = 400, description = "Certificate does not exist")
    )
)]
pub async fn delete_certificate(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .certificate_service
        .delete_certificate(id)
        .await
        .or_bad_request("Certificate")?;

    Ok(Deleted)
}
