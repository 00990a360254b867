//! End user domain entity and related types.
//!
//! End users are the certificate holders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Certificate holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
}

/// End user creation input (password already hashed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEndUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_mobile: Option<String>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
}

/// Mutable end user fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndUserChanges {
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
}

/// End user response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndUserResponse {
    pub id: Uuid,
    #[schema(example = "Sam Holder")]
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub phone_mobile: Option<String>,
    pub phone_mobile_verified: Option<bool>,
    pub phone_home: Option<String>,
    pub address_code: Option<String>,
    pub address_detailed: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_login_date: DateTime<Utc>,
}

impl From<EndUser> for EndUserResponse {
    fn from(end_user: EndUser) -> Self {
        Self {
            id: end_user.id,
            name: end_user.name,
            email: end_user.email,
            email_verified: end_user.email_verified,
            phone_mobile: end_user.phone_mobile,
            phone_mobile_verified: end_user.phone_mobile_verified,
            phone_home: end_user.phone_home,
            address_code: end_user.address_code,
            address_detailed: end_user.address_detailed,
            created_date: end_user.created_date,
            last_login_date: end_user.last_login_date,
        }
    }
}

/// Partial view returned after registering an end user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndUserPartialResponse {
    pub id: Uuid,
    pub name: String,
    pub is_logged_in: bool,
}

impl From<EndUser> for EndUserPartialResponse {
    fn from(end_user: EndUser) -> Self {
        Self {
            id: end_user.id,
            name: end_user.name,
            is_logged_in: false,
        }
    }
}
