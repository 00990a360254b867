//! Changelog domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A release note / notice shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub id: Uuid,
    pub content: String,
    pub change_type: String,
    pub was_read: bool,
    pub created_date: DateTime<Utc>,
}

/// Changelog creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChangelog {
    pub content: String,
    pub change_type: String,
}

/// Mutable changelog fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogChanges {
    pub content: String,
    pub change_type: String,
    pub was_read: bool,
}

/// Changelog response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogResponse {
    pub id: Uuid,
    #[schema(example = "Certificates can now be downloaded as PDF")]
    pub content: String,
    #[serde(rename = "type")]
    #[schema(example = "feature")]
    pub change_type: String,
    pub was_read: bool,
    pub created_date: DateTime<Utc>,
}

impl From<Changelog> for ChangelogResponse {
    fn from(changelog: Changelog) -> Self {
        Self {
            id: changelog.id,
            content: changelog.content,
            change_type: changelog.change_type,
            was_read: changelog.was_read,
            created_date: changelog.created_date,
        }
    }
}

/// Partial view returned after posting a changelog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogPartialResponse {
    pub id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub change_type: String,
    pub created_date: DateTime<Utc>,
}

impl From<Changelog> for ChangelogPartialResponse {
    fn from(changelog: Changelog) -> Self {
        Self {
            id: changelog.id,
            content: changelog.content,
            change_type: changelog.change_type,
            created_date: changelog.created_date,
        }
    }
}
