//! Employee handlers.

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
use crate::config::ROUTE_EMPLOYEES;
use crate::domain::{EmployeeChanges, EmployeePartialResponse, EmployeeResponse, LoginStatus};
use crate::errors::{AppResult, ResultExt};
use crate::services::EmployeeRegistration;
use crate::types::{Accepted, Created, Deleted};

/// Employee creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jo")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Optional; employees without a password cannot log in
    pub password: Option<String>,
    pub phone_mobile: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 10, message = "Privilege level must be between 0 and 10"))]
    pub privilege_level: i32,
    pub business_id: Uuid,
}

/// Employee update request. Every mutable field is overwritten.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    #[serde(default)]
    #[validate(range(min = 0, max = 10, message = "Privilege level must be between 0 and 10"))]
    pub privilege_level: i32,
    pub business_id: Uuid,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/login", post(login))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses((status = 200, description = "All employees", body = Vec<EmployeeResponse>))
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Create an employee under an existing business
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeePartialResponse),
        (status = 400, description = "Validation error or business does not exist")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<Created<EmployeePartialResponse>> {
    let employee = state
        .employee_service
        .create_employee(EmployeeRegistration {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            phone_mobile: payload.phone_mobile,
            privilege_level: payload.privilege_level,
            business_id: payload.business_id,
        })
        .await?;

    Ok(Created::at(
        ROUTE_EMPLOYEES,
        employee.id,
        EmployeePartialResponse::from(employee),
    ))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 202, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Validation error, employee or business does not exist")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Accepted<EmployeeResponse>> {
    let changes = EmployeeChanges {
        name: payload.name,
        email: payload.email,
        email_verified: payload.email_verified,
        phone_mobile: payload.phone_mobile,
        phone_mobile_verified: payload.phone_mobile_verified,
        privilege_level: payload.privilege_level,
        business_id: payload.business_id,
    };

    let employee = state
        .employee_service
        .update_employee(id, changes)
        .await
        .or_bad_request("Employee")?;

    Ok(Accepted(EmployeeResponse::from(employee)))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 202, description = "Employee deleted"),
        (status = 400, description = "Employee does not exist")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .employee_service
        .delete_employee(id)
        .await
        .or_bad_request("Employee")?;

    Ok(Deleted)
}

/// Employee login
#[utoipa::path(
    post,
    path = "/employees/login",
    tag = "Employees",
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
        .employee_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(status))
}
