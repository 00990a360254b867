//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    admin_routes, business_routes, certificate_routes, changelog_routes, employee_routes,
    end_user_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{
    ROUTE_ADMINS, ROUTE_BUSINESSES, ROUTE_CERTIFICATES, ROUTE_CHANGELOGS, ROUTE_EMPLOYEES,
    ROUTE_END_USERS,
};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(ROUTE_ADMINS, admin_routes())
        .nest(ROUTE_BUSINESSES, business_routes())
        .nest(ROUTE_CERTIFICATES, certificate_routes())
        .nest(ROUTE_CHANGELOGS, changelog_routes())
        .nest(ROUTE_EMPLOYEES, employee_routes())
        .nest(ROUTE_END_USERS, end_user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the Qardless API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: ServiceStatus {
                    status: "healthy",
                    error: None,
                },
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: ServiceStatus {
                        status: "unhealthy",
                        error: Some(e.to_string()),
                    },
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::domain::{hash_password, Admin};
    use crate::infra::{Database, MockAdminRepository};
    use crate::services::test_support::TestUnitOfWork;
    use crate::services::{
        AdminManager, AdminService, BusinessManager, BusinessService, CertificateManager,
        CertificateService, ChangelogManager, ChangelogService, EmployeeManager, EmployeeService,
        EndUserManager, EndUserService, MockServiceContainer,
    };

    /// Router whose services all run over the given mocked repositories.
    async fn router_over(uow: TestUnitOfWork) -> Router {
        let uow = Arc::new(uow);
        let mut services = MockServiceContainer::new();

        let u = uow.clone();
        services
            .expect_admins()
            .returning(move || -> Arc<dyn AdminService> {
                Arc::new(AdminManager::new(u.clone()))
            });
        let u = uow.clone();
        services
            .expect_businesses()
            .returning(move || -> Arc<dyn BusinessService> {
                Arc::new(BusinessManager::new(u.clone()))
            });
        let u = uow.clone();
        services
            .expect_certificates()
            .returning(move || -> Arc<dyn CertificateService> {
                Arc::new(CertificateManager::new(u.clone()))
            });
        let u = uow.clone();
        services
            .expect_changelogs()
            .returning(move || -> Arc<dyn ChangelogService> {
                Arc::new(ChangelogManager::new(u.clone()))
            });
        let u = uow.clone();
        services
            .expect_employees()
            .returning(move || -> Arc<dyn EmployeeService> {
                Arc::new(EmployeeManager::new(u.clone()))
            });
        services
            .expect_end_users()
            .returning(move || -> Arc<dyn EndUserService> {
                Arc::new(EndUserManager::new(uow.clone()))
            });

        // Never queried by these routes
        let database = Database::connect_without_migrations(&Config::with_database_url(
            "sqlite::memory:",
        ))
        .await
        .unwrap();

        create_router(AppState::new(&services, Arc::new(database)))
    }

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_missing_admin_is_404_with_error_body() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_id().returning(|_| Ok(None));

        let router = router_over(TestUnitOfWork {
            admins: Arc::new(admins),
            ..TestUnitOfWork::default()
        })
        .await;
        let (status, body) = send(
            router,
            Method::GET,
            &format!("/admins/{}", Uuid::new_v4()),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_id_is_a_validation_error() {
        let router = router_over(TestUnitOfWork::default()).await;

        let (status, body) = send(router, Method::GET, "/businesses/not-a-uuid", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_wrong_password_is_401_and_not_recorded() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_email().returning(|email| {
            let now = Utc::now();
            Ok(Some(Admin {
                id: Uuid::new_v4(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: email.to_string(),
                email_verified: true,
                password_hash: hash_password("secret"),
                phone_mobile: None,
                phone_mobile_verified: false,
                created_date: now,
                last_login_date: now,
            }))
        });
        admins.expect_record_login().never();

        let router = router_over(TestUnitOfWork {
            admins: Arc::new(admins),
            ..TestUnitOfWork::default()
        })
        .await;
        let (status, body) = send(
            router,
            Method::POST,
            "/admins/login",
            Some(json!({ "email": "ada@qardless.com", "password": "guess" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}
