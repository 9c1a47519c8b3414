//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["notes_table_ready"], true);
}

// ---------------------------------------------------------------------------
// Test: a missing notes table reports degraded with 503
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn health_check_degraded_without_notes_table(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone()).await;
    sqlx::query("DROP TABLE notes").execute(&pool).await.unwrap();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["notes_table_ready"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let response = get(&app, "/api/notes").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
    // A UUID is 36 chars with hyphens.
    assert_eq!(request_id.unwrap().to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: any origin is allowed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn cors_allows_any_origin(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/notes")
        .header(ORIGIN, "https://some-frontend.example")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[sqlx::test(migrations = false)]
async fn cors_preflight_for_put_succeeds(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/notes/1")
        .header(ORIGIN, "http://localhost:3000")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("PUT"));
}
