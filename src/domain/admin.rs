//! Admin domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Platform administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: bool,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
}

impl Admin {
    /// Display name used in logs and responses
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Admin creation input (password already hashed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_mobile: Option<String>,
}

/// Mutable admin fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: bool,
}

/// Admin response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@qardless.com")]
    pub email: String,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: bool,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            first_name: admin.first_name,
            last_name: admin.last_name,
            email: admin.email,
            email_verified: admin.email_verified,
            phone_mobile: admin.phone_mobile,
            phone_mobile_verified: admin.phone_mobile_verified,
            created_date: admin.created_date,
            last_login_date: admin.last_login_date,
        }
    }
}

/// Partial view returned after registering an admin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPartialResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Admin> for AdminPartialResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            first_name: admin.first_name,
            last_name: admin.last_name,
            email: admin.email,
        }
    }
}
