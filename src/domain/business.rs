//! Business domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Business domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_date: DateTime<Utc>,
}

/// Business creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusiness {
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Mutable business fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessChanges {
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Business response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Acme Training")]
    pub title: String,
    #[schema(example = "info@acme.com")]
    pub email: String,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    pub created_date: DateTime<Utc>,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            title: business.title,
            email: business.email,
            phone: business.phone,
            created_date: business.created_date,
        }
    }
}

/// Partial view returned after creating a business
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPartialResponse {
    pub id: Uuid,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<Business> for BusinessPartialResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            title: business.title,
            email: business.email,
            phone: business.phone,
        }
    }
}
