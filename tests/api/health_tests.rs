//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::TestApp;

/// Basic health check endpoint returns 200 OK with a status field
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

/// Liveness probe always returns 200
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let response = app.server.get("/health/live").await;

    response.assert_status(StatusCode::OK);
}

/// Readiness probe returns 200 while the database answers
#[tokio::test]
async fn test_readiness_probe() {
    let app = TestApp::new().await;

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["database"], "healthy");
}
