//! Login state returned by the login and logout endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a login or logout call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    pub id: Uuid,
    pub is_logged_in: bool,
}

impl LoginStatus {
    pub fn logged_in(id: Uuid) -> Self {
        Self {
            id,
            is_logged_in: true,
        }
    }

    pub fn logged_out(id: Uuid) -> Self {
        Self {
            id,
            is_logged_in: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(LoginStatus::logged_in(id)).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["isLoggedIn"], true);
    }
}
