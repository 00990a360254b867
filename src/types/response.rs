use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

/// 201 with a `Location` header pointing at the new resource
pub struct Created<T: Serialize> {
    location: String,
    body: T,
}

impl<T: Serialize> Created<T> {
    /// `collection` is the route prefix, e.g. `/businesses`.
    pub fn at(collection: &str, id: Uuid, body: T) -> Self {
        Self {
            location: format!("{}/{}", collection, id),
            body,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}

/// 202 carrying the refreshed resource after an update
pub struct Accepted<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Accepted<T> {
    fn into_response(self) -> Response {
        (StatusCode::ACCEPTED, Json(self.0)).into_response()
    }
}

/// 202 with an empty body after a delete
pub struct Deleted;

impl IntoResponse for Deleted {
    fn into_response(self) -> Response {
        StatusCode::ACCEPTED.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_sets_location() {
        let id = Uuid::new_v4();
        let response = Created::at("/businesses", id, serde_json::json!({ "id": id })).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            format!("/businesses/{}", id).as_str()
        );
    }

    #[test]
    fn test_deleted_is_accepted() {
        assert_eq!(Deleted.into_response().status(), StatusCode::ACCEPTED);
    }
}
