//! HTTP integration tests driving the router end to end.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{id_of, TestApp};

async fn create_acme(app: &TestApp) -> String {
    let response = app
        .post(
            "/businesses",
            json!({ "title": "Acme", "email": "a@acme.com", "phone": "555-0100" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    id_of(&response.body)
}

async fn create_holder(app: &TestApp) -> String {
    let response = app
        .post(
            "/endusers",
            json!({ "name": "Sam Holder", "email": "sam@example.com", "password": "secret" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    id_of(&response.body)
}

fn certificate_body(business_id: &str, end_user_id: &str) -> serde_json::Value {
    json!({
        "title": "First Aid",
        "serialNumber": "FA-1",
        "pdfUri": "https://files.example/fa-1.pdf",
        "qrCodeUri": "https://files.example/fa-1.png",
        "businessId": business_id,
        "endUserId": end_user_id
    })
}

#[tokio::test]
async fn test_root_and_health() {
    let app = TestApp::new().await;

    let root = app.get("/").await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body, json!("Welcome to the Qardless API"));

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "healthy");
}

#[tokio::test]
async fn test_business_employee_cascade_scenario() {
    let app = TestApp::new().await;

    let created = app
        .post(
            "/businesses",
            json!({ "title": "Acme", "email": "a@acme.com", "phone": "555-0100" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Acme");
    assert_eq!(created.body["email"], "a@acme.com");
    assert_eq!(created.body["phone"], "555-0100");
    let business_id = id_of(&created.body);
    assert_eq!(
        created.location.as_deref(),
        Some(format!("/businesses/{}", business_id).as_str())
    );

    let employee = app
        .post(
            "/employees",
            json!({ "name": "Jo", "businessId": business_id }),
        )
        .await;
    assert_eq!(employee.status, StatusCode::CREATED);
    assert_eq!(employee.body["businessId"], business_id.as_str());
    let employee_id = id_of(&employee.body);
    assert_ne!(employee_id, business_id);

    let fetched = app.get(&format!("/employees/{}", employee_id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "Jo");
    assert_eq!(fetched.body["privilegeLevel"], 0);

    let staff = app
        .get(&format!("/businesses/{}/employees", business_id))
        .await;
    assert_eq!(staff.status, StatusCode::OK);
    assert_eq!(staff.body.as_array().map(Vec::len), Some(1));

    let deleted = app.delete(&format!("/businesses/{}", business_id)).await;
    assert_eq!(deleted.status, StatusCode::ACCEPTED);

    let gone = app.get(&format!("/employees/{}", employee_id)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_rows_map_to_404_on_read_and_400_on_write() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let read = app.get(&format!("/businesses/{}", missing)).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);
    assert_eq!(read.body["error"]["code"], "NOT_FOUND");

    let update = app
        .put(
            &format!("/businesses/{}", missing),
            json!({ "title": "Acme", "email": "a@acme.com" }),
        )
        .await;
    assert_eq!(update.status, StatusCode::BAD_REQUEST);

    let delete = app.delete(&format!("/changelogs/{}", missing)).await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);

    let nested = app
        .get(&format!("/endusers/{}/certificates", missing))
        .await;
    assert_eq!(nested.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_bodies_are_rejected() {
    let app = TestApp::new().await;

    let empty_title = app
        .post("/businesses", json!({ "title": "", "email": "a@acme.com" }))
        .await;
    assert_eq!(empty_title.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_title.body["error"]["code"], "VALIDATION_ERROR");

    let bad_email = app
        .post("/businesses", json!({ "title": "Acme", "email": "not-an-email" }))
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let missing_field = app.post("/changelogs", json!({ "content": "hi" })).await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);

    let listed = app.get("/businesses").await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_employee_for_unknown_business_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/employees",
            json!({ "name": "Jo", "businessId": Uuid::new_v4() }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(app.get("/employees").await.body, json!([]));
}

#[tokio::test]
async fn test_certificate_lifecycle() {
    let app = TestApp::new().await;
    let business_id = create_acme(&app).await;
    let end_user_id = create_holder(&app).await;

    let dangling = app
        .post(
            "/certificates",
            certificate_body(&business_id, &Uuid::new_v4().to_string()),
        )
        .await;
    assert_eq!(dangling.status, StatusCode::BAD_REQUEST);

    let issued = app
        .post("/certificates", certificate_body(&business_id, &end_user_id))
        .await;
    assert_eq!(issued.status, StatusCode::CREATED);
    let certificate_id = id_of(&issued.body);

    let held = app
        .get(&format!("/endusers/{}/certificates", end_user_id))
        .await;
    assert_eq!(held.status, StatusCode::OK);
    assert_eq!(held.body[0]["id"], certificate_id.as_str());
    assert_eq!(held.body[0]["expired"], false);

    let mut changes = certificate_body(&business_id, &end_user_id);
    changes["title"] = json!("First Aid Refresher");
    changes["expires"] = json!(true);
    changes["expiryDate"] = json!("2000-01-01T00:00:00Z");
    let updated = app
        .put(&format!("/certificates/{}", certificate_id), changes)
        .await;
    assert_eq!(updated.status, StatusCode::ACCEPTED);
    assert_eq!(updated.body["title"], "First Aid Refresher");
    assert_eq!(updated.body["expired"], true);

    let deleted = app.delete(&format!("/endusers/{}", end_user_id)).await;
    assert_eq!(deleted.status, StatusCode::ACCEPTED);

    let gone = app.get(&format!("/certificates/{}", certificate_id)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_user_login_updates_last_login() {
    let app = TestApp::new().await;
    let end_user_id = create_holder(&app).await;

    let before = app.get(&format!("/endusers/{}", end_user_id)).await;
    assert!(before.body.get("password").is_none());
    assert!(before.body.get("passwordHash").is_none());

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let login = app
        .post(
            "/endusers/login",
            json!({ "email": "sam@example.com", "password": "secret" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["id"], end_user_id.as_str());
    assert_eq!(login.body["isLoggedIn"], true);

    let after = app.get(&format!("/endusers/{}", end_user_id)).await;
    assert_ne!(after.body["lastLoginDate"], before.body["lastLoginDate"]);

    let wrong = app
        .post(
            "/endusers/login",
            json!({ "email": "sam@example.com", "password": "guess" }),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let unknown = app
        .post(
            "/endusers/login",
            json!({ "email": "nobody@example.com", "password": "secret" }),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_login_and_logout() {
    let app = TestApp::new().await;

    let created = app
        .post(
            "/admins",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@qardless.com",
                "password": "secret"
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let admin_id = id_of(&created.body);

    let login = app
        .post(
            "/admins/login",
            json!({ "email": "ada@qardless.com", "password": "secret" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["isLoggedIn"], true);

    let logout = app
        .post("/admins/logout", json!({ "id": admin_id }))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["isLoggedIn"], false);

    let unknown = app
        .post("/admins/logout", json!({ "id": Uuid::new_v4() }))
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_changelog_mark_read() {
    let app = TestApp::new().await;

    let posted = app
        .post(
            "/changelogs",
            json!({ "content": "PDF download", "type": "feature" }),
        )
        .await;
    assert_eq!(posted.status, StatusCode::CREATED);
    assert_eq!(posted.body["type"], "feature");
    let changelog_id = id_of(&posted.body);

    let read = app
        .request(
            axum::http::Method::PATCH,
            &format!("/changelogs/{}/read", changelog_id),
            None,
        )
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.body["wasRead"], true);

    let missing = app
        .request(
            axum::http::Method::PATCH,
            &format!("/changelogs/{}/read", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    let first = app
        .post(
            "/endusers",
            json!({ "name": "First", "email": "dup@example.com", "password": "one" }),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .post(
            "/endusers",
            json!({ "name": "Second", "email": "dup@example.com", "password": "two" }),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["error"]["code"], "BAD_REQUEST");

    let login = app
        .post(
            "/endusers/login",
            json!({ "email": "dup@example.com", "password": "one" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["id"], id_of(&first.body).as_str());

    let other_id = create_holder(&app).await;
    let taken = app
        .put(
            &format!("/endusers/{}", other_id),
            json!({ "name": "Sam Holder", "email": "dup@example.com", "emailVerified": false }),
        )
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_id_is_a_validation_error() {
    let app = TestApp::new().await;
    let response = app.get("/employees/not-a-uuid").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
}
