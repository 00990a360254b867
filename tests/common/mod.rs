//! Shared helpers for integration tests.
//!
//! Each test gets its own SQLite file in a temporary directory, migrated
//! with the real migrator.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use qardless_api::api::{create_router, AppState};
use qardless_api::config::Config;
use qardless_api::infra::Database;

/// Migrated throwaway database. The directory is removed on drop.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("qardless.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let db = Database::connect(&Config::with_database_url(url))
            .await
            .expect("connect and migrate");

        Self { db, _dir: dir }
    }

    pub fn connection(&self) -> sea_orm::DatabaseConnection {
        self.db.get_connection()
    }
}

/// Router wired to a fresh database.
pub struct TestApp {
    pub router: Router,
    _db: TestDb,
}

/// Status, headers and decoded JSON body (`Value::Null` when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let state = AppState::from_database(Arc::new(test_db.db.clone()));
        Self {
            router: create_router(state),
            _db: test_db,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            location,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

/// Id field of a JSON response body.
pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("id in body").to_string()
}
