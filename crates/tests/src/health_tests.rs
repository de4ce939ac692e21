use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use server::health::health_router;
use tower::ServiceExt;

use crate::common;

async fn get_health(app: axum::Router) -> Value {
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_reports_reachable_backend() {
    let app = health_router(common::mock_backend().await);

    let body = get_health(app).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "reachable");
}

#[tokio::test]
async fn test_health_stays_ok_when_backend_is_down() {
    let app = health_router(common::unreachable_backend());

    let body = get_health(app).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "unreachable");
}
