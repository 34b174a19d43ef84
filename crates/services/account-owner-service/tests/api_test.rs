//! Integration tests for API endpoints over an in-memory SQLite database.

mod support;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use support::{router, setup_database, setup_unmigrated_database};

// =============================================================================
// Helpers
// =============================================================================

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn create_owner(app: &Router, name: &str) -> Uuid {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/owner",
        json!({
            "name": name,
            "dateOfBirth": "1990-01-01T00:00:00Z",
            "address": "1 Main St"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().parse().unwrap()
}

async fn create_account(app: &Router, owner_id: Uuid, account_type: &str) -> (StatusCode, Value) {
    send_json(
        app,
        Method::POST,
        "/api/account",
        json!({
            "dateCreated": "2024-01-01T00:00:00Z",
            "accountType": account_type,
            "ownerId": owner_id
        }),
    )
    .await
}

// =============================================================================
// Diagnostics
// =============================================================================

#[tokio::test]
async fn test_wiring_check_needs_no_storage() {
    // Tables are missing, the endpoint must still answer
    let app = router(setup_unmigrated_database().await);

    let (status, body) = get(&app, "/api/weatherforecast").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Repository Pattern Working!");
    assert_eq!(body["status"], "Success - No Database Connection Required");
    assert_eq!(body["repositoryInjected"], true);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_database_probe_on_empty_storage() {
    let app = router(setup_database().await);

    let (status, body) = get(&app, "/api/weatherforecast/test-db").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Database Connection Working!",
            "ownersCount": 0,
            "domesticAccountsCount": 0
        })
    );
}

#[tokio::test]
async fn test_database_probe_counts_domestic_accounts_only() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;
    let bob = create_owner(&app, "Bob").await;
    create_account(&app, alice, "Domestic").await;
    create_account(&app, alice, "Foreign").await;
    create_account(&app, bob, "Domestic").await;

    let (status, body) = get(&app, "/api/weatherforecast/test-db").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ownersCount"], 2);
    assert_eq!(body["domesticAccountsCount"], 2);
}

#[tokio::test]
async fn test_database_probe_reports_storage_error() {
    let app = router(setup_unmigrated_database().await);

    let (status, body) = get(&app, "/api/weatherforecast/test-db").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Database Error: "), "got {}", error);
    assert!(error.contains("owner"), "got {}", error);
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = router(setup_database().await);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"]["status"], "healthy");

    let (status, body) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/weatherforecast/test-db"].is_object());
}

// =============================================================================
// Owners
// =============================================================================

#[tokio::test]
async fn test_owner_lifecycle() {
    let app = router(setup_database().await);
    let id = create_owner(&app, "Alice").await;

    let (status, body) = get(&app, &format!("/api/owner/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["dateOfBirth"], "1990-01-01T00:00:00Z");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/owner/{}", id),
        json!({
            "name": "Alice Jones",
            "dateOfBirth": "1985-06-15T00:00:00Z",
            "address": "9 Elm Rd"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice Jones");

    let (status, body) = get(&app, "/api/owner").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["address"], "9 Elm Rd");

    let (status, _) = delete(&app, &format!("/api/owner/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/owner/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_created_owner_reads_back_unchanged() {
    let app = router(setup_database().await);

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/api/owner",
        json!({
            "name": "Alice",
            "dateOfBirth": "1990-01-01T08:30:00.123456789Z",
            "address": "1 Main St"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["dateOfBirth"], "1990-01-01T08:30:00.123456Z");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/owner/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_owner_validation_errors() {
    let app = router(setup_database().await);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/owner",
        json!({
            "name": "a".repeat(61),
            "dateOfBirth": "1990-01-01T00:00:00Z",
            "address": "1 Main St"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Missing dateOfBirth
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/owner",
        json!({ "name": "Alice", "address": "1 Main St" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/api/owner").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_missing_owner_is_not_found() {
    let app = router(setup_database().await);

    let (status, _) = send_json(
        &app,
        Method::PUT,
        &format!("/api/owner/{}", Uuid::new_v4()),
        json!({
            "name": "Ghost",
            "dateOfBirth": "1990-01-01T00:00:00Z",
            "address": "Nowhere"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, &format!("/api/owner/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_with_accounts() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;
    let bob = create_owner(&app, "Bob").await;
    create_account(&app, alice, "Domestic").await;
    create_account(&app, alice, "Foreign").await;
    create_account(&app, bob, "Domestic").await;

    let (status, body) = get(&app, &format!("/api/owner/{}/account", alice)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().all(|a| a["ownerId"] == alice.to_string()));
}

#[tokio::test]
async fn test_owner_with_accounts_cannot_be_deleted() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;
    let (_, account) = create_account(&app, alice, "Domestic").await;

    let (status, body) = delete(&app, &format!("/api/owner/{}", alice)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "REFERENTIAL_INTEGRITY");

    let account_id = account["id"].as_str().unwrap();
    let (status, _) = delete(&app, &format!("/api/account/{}", account_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(&app, &format!("/api/owner/{}", alice)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =============================================================================
// Accounts
// =============================================================================

#[tokio::test]
async fn test_account_lifecycle() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;

    let (status, body) = create_account(&app, alice, "Domestic").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["accountType"], "Domestic");
    assert_eq!(body["ownerId"], alice.to_string());
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/account/{}", id),
        json!({
            "dateCreated": "2024-02-01T00:00:00.000000999Z",
            "accountType": "Foreign",
            "ownerId": alice
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accountType"], "Foreign");

    assert_eq!(body["dateCreated"], "2024-02-01T00:00:00Z");

    let (status, fetched) = get(&app, &format!("/api/account/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    let (status, _) = delete(&app, &format!("/api/account/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, &format!("/api/account/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_account_for_unknown_owner_conflicts() {
    let app = router(setup_database().await);

    let (status, body) = create_account(&app, Uuid::new_v4(), "Domestic").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "REFERENTIAL_INTEGRITY");

    let (_, body) = get(&app, "/api/account").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_account_type_validation() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;

    let (status, body) = create_account(&app, alice, &"x".repeat(31)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = create_account(&app, alice, "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_accounts_by_type() {
    let app = router(setup_database().await);
    let alice = create_owner(&app, "Alice").await;
    create_account(&app, alice, "Domestic").await;
    create_account(&app, alice, "Foreign").await;
    create_account(&app, alice, "Domestic").await;

    let (status, body) = get(&app, "/api/account?accountType=Domestic").await;
    assert_eq!(status, StatusCode::OK);
    let accounts = body.as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().all(|a| a["accountType"] == "Domestic"));

    let (_, body) = get(&app, "/api/account").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}
