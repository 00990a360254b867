//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A staff member of a business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub privilege_level: i32,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
    pub business_id: Uuid,
}

/// Employee creation input (password already hashed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone_mobile: Option<String>,
    pub privilege_level: i32,
    pub business_id: Uuid,
}

/// Mutable employee fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub privilege_level: i32,
    pub business_id: Uuid,
}

/// Employee response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    #[schema(example = "Jo")]
    pub name: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub privilege_level: i32,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
    pub business_id: Uuid,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            email_verified: employee.email_verified,
            phone_mobile: employee.phone_mobile,
            phone_mobile_verified: employee.phone_mobile_verified,
            privilege_level: employee.privilege_level,
            created_date: employee.created_date,
            last_login_date: employee.last_login_date,
            business_id: employee.business_id,
        }
    }
}

/// Partial view returned after creating an employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePartialResponse {
    pub id: Uuid,
    pub name: String,
    pub business_id: Uuid,
}

impl From<Employee> for EmployeePartialResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            business_id: employee.business_id,
        }
    }
}
