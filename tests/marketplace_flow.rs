//! End-to-end marketplace flows against a real PostgreSQL database.
//!
//! These tests only run when `TIDYHUB_TEST_DATABASE_URL` points at a reachable
//! database; otherwise each test prints a skip notice and returns. Pending
//! migrations are applied before the first pool is handed out. Created rows use
//! fresh UUIDs in their identifying fields, so reruns against the same database
//! do not collide, and list assertions check for containment rather than exact
//! counts.

use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use uuid::Uuid;

use tidyhub::AppState;
use tidyhub::api::create_router;
use tidyhub::config::{AuthConfig, DatabaseConfig};
use tidyhub::db::{AsyncDbPool, establish_async_connection_pool, run_pending_migrations};
use tidyhub::error::AppError;
use tidyhub::models::NewService;
use tidyhub::repositories::ServiceRepository;

/// Serializes migration runs; concurrent harness invocations against an
/// empty database race on creating the schema tables.
static MIGRATION_LOCK: Mutex<()> = Mutex::new(());

/// Connects to the test database, applying pending migrations first.
///
/// Returns `None` (after printing a notice) when no test database is
/// configured, so tests can opt out instead of failing.
async fn test_pool() -> Option<AsyncDbPool> {
    let url = match std::env::var("TIDYHUB_TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping: TIDYHUB_TEST_DATABASE_URL is not set");
            return None;
        }
    };

    {
        let _guard = MIGRATION_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        run_pending_migrations(&url)
            .await
            .expect("migrations should apply to the test database");
    }

    let config = DatabaseConfig {
        url,
        max_connections: 5,
        ..DatabaseConfig::default()
    };
    let pool = establish_async_connection_pool(&config)
        .await
        .expect("connection pool should build against the test database");
    Some(pool)
}

fn test_router(pool: AsyncDbPool) -> Router {
    create_router(AppState::new(pool, AuthConfig::default()))
}

/// Sends one request through the router and decodes the JSON body.
///
/// Responses without a body (axum's bare 404 fallback) decode to `Null`.
async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_service_crud_lifecycle() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let router = test_router(pool);

    let name = format!("Deep clean {}", Uuid::new_v4());
    let (status, body) = send_json(
        &router,
        Method::POST,
        "/services/v1/",
        Some(json!({
            "name": name,
            "description": "Full apartment deep clean",
            "price_per_hour": 42.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["responseMessage"], "Service created successfully");
    assert_eq!(body["responseCode"], 201);
    let service_id = body["data"]["service_id"].as_str().unwrap().to_string();
    assert!(Uuid::parse_str(&service_id).is_ok());
    assert_eq!(body["data"]["price_per_hour"], 42.5);
    assert_eq!(
        body["data"]["created_at"], body["data"]["updated_at"],
        "timestamps should match on a fresh row"
    );

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/services/v1/{service_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Service found");
    assert_eq!(body["data"]["name"], name);

    let (status, body) = send_json(&router, Method::GET, "/services/v1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Services found");
    let listed = body["data"].as_array().unwrap();
    assert!(
        listed.iter().any(|s| s["service_id"] == service_id.as_str()),
        "catalog listing should contain the created service"
    );

    let renamed = format!("Move-out clean {}", Uuid::new_v4());
    let (status, body) = send_json(
        &router,
        Method::PUT,
        &format!("/services/v1/{service_id}"),
        Some(json!({
            "name": renamed,
            "description": "Full apartment deep clean plus windows",
            "price_per_hour": 55.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Service updated successfully");
    assert_eq!(body["data"]["service_id"], service_id.as_str());
    assert_eq!(body["data"]["name"], renamed);
    assert_eq!(body["data"]["price_per_hour"], 55.0);

    let (status, body) = send_json(
        &router,
        Method::DELETE,
        &format!("/services/v1/{service_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Service deleted successfully");

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/services/v1/{service_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["responseMessage"],
        format!("Resource not found: service with id={service_id}")
    );
    assert_eq!(body["responseCode"], 404);

    // An update against the deleted row must not recreate it
    let (status, body) = send_json(
        &router,
        Method::PUT,
        &format!("/services/v1/{service_id}"),
        Some(json!({
            "name": "Ghost service",
            "description": "Should not come back",
            "price_per_hour": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["responseMessage"],
        format!("Resource not found: service with id={service_id}")
    );
}

#[tokio::test]
async fn test_request_lifecycle_and_cleaner_assignment() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let router = test_router(pool);

    let client = format!("client-{}", Uuid::new_v4());
    let cleaner = format!("cleaner-{}", Uuid::new_v4());
    let service_id = Uuid::new_v4();

    // cleaner_id omitted; the request starts unassigned
    let (status, body) = send_json(
        &router,
        Method::POST,
        "/requests/v1/",
        Some(json!({
            "client_id": client,
            "service_id": service_id,
            "requested_date": "2026-09-01T09:00:00Z",
            "status": "pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["responseMessage"], "Request created successfully");
    assert_eq!(body["data"]["cleaner_id"], "");
    let request_id = body["data"]["request_id"].as_str().unwrap().to_string();
    let created_updated_at = body["data"]["updated_at"].clone();

    let (status, body) = send_json(
        &router,
        Method::POST,
        &format!("/requests/v1/{request_id}/assign-cleaner/{cleaner}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Cleaner assigned successfully");
    assert_eq!(body["data"]["cleaner_id"], cleaner.as_str());
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(
        body["data"]["updated_at"], created_updated_at,
        "assignment must not touch the row timestamp"
    );

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/requests/v1/client/{client}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Requests found for client");
    let by_client = body["data"].as_array().unwrap();
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0]["request_id"], request_id.as_str());

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/requests/v1/cleaner/{cleaner}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Requests found for cleaner");
    let by_cleaner = body["data"].as_array().unwrap();
    assert!(
        by_cleaner.iter().any(|r| r["request_id"] == request_id.as_str()),
        "cleaner listing should contain the assigned request"
    );

    // A client with no requests still gets a 200 with an empty list
    let stranger = format!("client-{}", Uuid::new_v4());
    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/requests/v1/client/{stranger}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, body) = send_json(
        &router,
        Method::PUT,
        &format!("/requests/v1/{request_id}"),
        Some(json!({
            "client_id": client,
            "cleaner_id": cleaner,
            "service_id": service_id,
            "requested_date": "2026-09-02T10:00:00Z",
            "status": "confirmed"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Request updated successfully");
    assert_eq!(body["data"]["status"], "confirmed");
    assert_eq!(body["data"]["request_id"], request_id.as_str());

    let (status, body) = send_json(
        &router,
        Method::DELETE,
        &format!("/requests/v1/{request_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Request deleted successfully");

    let (status, body) = send_json(
        &router,
        Method::DELETE,
        &format!("/requests/v1/{request_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["responseMessage"],
        format!("Resource not found: request with id={request_id}")
    );
}

#[tokio::test]
async fn test_review_lifecycle() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let router = test_router(pool);

    let client = format!("client-{}", Uuid::new_v4());
    let cleaner = format!("cleaner-{}", Uuid::new_v4());
    let booked_request = Uuid::new_v4();

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/reviews/v1/",
        Some(json!({
            "request_id": booked_request,
            "client_id": client,
            "cleaner_id": cleaner,
            "rating": "5",
            "comment": "Spotless work"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["responseMessage"], "Review created successfully");
    let review_id = body["data"]["review_id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/reviews/v1/{review_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Review found");
    assert_eq!(body["data"]["rating"], "5");

    let (status, body) = send_json(
        &router,
        Method::PUT,
        &format!("/reviews/v1/{review_id}"),
        Some(json!({
            "request_id": booked_request,
            "client_id": client,
            "cleaner_id": cleaner,
            "rating": "4",
            "comment": "Spotless work, arrived a little late"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Review updated successfully");
    assert_eq!(body["data"]["rating"], "4");

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/reviews/v1/client/{client}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Reviews found for client");
    let by_client = body["data"].as_array().unwrap();
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0]["review_id"], review_id.as_str());

    let (status, body) = send_json(
        &router,
        Method::GET,
        &format!("/reviews/v1/cleaner/{cleaner}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Reviews found for cleaner");
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["review_id"] == review_id.as_str())
    );

    let (status, body) = send_json(
        &router,
        Method::DELETE,
        &format!("/reviews/v1/{review_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseMessage"], "Review deleted successfully");

    let (status, _) = send_json(
        &router,
        Method::GET,
        &format!("/reviews/v1/{review_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_primary_key_maps_to_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repo = ServiceRepository::new(pool);

    let new_service = NewService::new(
        format!("Duplicate probe {}", Uuid::new_v4()),
        "Inserted twice on purpose".to_string(),
        10.0,
    );
    let probe_id = new_service.service_id;

    repo.create(new_service.clone())
        .await
        .expect("first insert should succeed");
    let err = repo
        .create(new_service)
        .await
        .expect_err("second insert with the same id should fail");

    match err {
        AppError::Duplicate {
            entity,
            field,
            value,
        } => {
            assert_eq!(entity, "services");
            assert_eq!(field, "service_id");
            assert_eq!(value, probe_id.to_string());
        }
        other => panic!("expected Duplicate, got: {other:?}"),
    }

    repo.delete(probe_id).await.expect("cleanup should succeed");
}

#[tokio::test]
async fn test_delete_unknown_request_returns_404() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let router = test_router(pool);
    let missing = Uuid::new_v4();

    let (status, body) = send_json(
        &router,
        Method::DELETE,
        &format!("/requests/v1/{missing}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["responseMessage"],
        format!("Resource not found: request with id={missing}")
    );
}

#[tokio::test]
async fn test_assign_cleaner_to_unknown_request_returns_404() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let router = test_router(pool);
    let missing = Uuid::new_v4();

    let (status, body) = send_json(
        &router,
        Method::POST,
        &format!("/requests/v1/{missing}/assign-cleaner/cleaner-77"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["responseCode"], 404);
}
