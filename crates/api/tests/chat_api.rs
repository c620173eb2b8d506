//! HTTP-level integration tests for the chat proxy endpoint.
//!
//! The test configuration points the provider at an unbound local port, so
//! every upstream call fails at the transport layer. That exercises the
//! error path the endpoint must never turn into an unhandled fault.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_message_returns_400_with_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/chat", serde_json::json!({ "message": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn whitespace_message_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/chat", serde_json::json!({ "message": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_message_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/chat", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn provider_failure_returns_500_with_error_string(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/chat",
        serde_json::json!({ "message": "Какие у вас лаборатории?" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(!error.is_empty());
}
