use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use pretty_assertions::assert_eq;
use server::auth::cookies::{CookieSlot, PendingCookieAction, ACCESS_COOKIE, REFRESH_COOKIE};
use server::auth::{session_middleware, SessionToken};
use server::backend::BackendClient;
use tower::ServiceExt;

use crate::common;

/// Echo the token the middleware resolved, or `-` when there is none.
async fn whoami(token: Option<Extension<SessionToken>>) -> String {
    token.map(|Extension(t)| t.0).unwrap_or_else(|| "-".into())
}

async fn sign_in(Extension(slot): Extension<CookieSlot>) -> StatusCode {
    slot.put(PendingCookieAction::Set {
        access_token: "access-new".into(),
        refresh_token: Some("refresh-new".into()),
    });
    StatusCode::OK
}

async fn sign_out(Extension(slot): Extension<CookieSlot>) -> StatusCode {
    slot.put(PendingCookieAction::Clear);
    StatusCode::OK
}

fn app(backend: BackendClient) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/sign-in", get(sign_in))
        .route("/sign-out", get(sign_out))
        .layer(middleware::from_fn_with_state(backend, session_middleware))
}

async fn call(app: Router, path: &str, cookie: Option<&str>) -> (Vec<String>, String) {
    let mut req = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    let response = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (set_cookies, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_access_cookie_becomes_session_token() {
    let app = app(common::mock_backend().await);

    let cookie = format!("theme=dark; {ACCESS_COOKIE}={}", common::VALID_ACCESS);
    let (set_cookies, body) = call(app, "/whoami", Some(&cookie)).await;

    assert_eq!(body, common::VALID_ACCESS);
    assert!(set_cookies.is_empty());
}

#[tokio::test]
async fn test_no_cookies_passes_through_anonymous() {
    let app = app(common::mock_backend().await);

    let (set_cookies, body) = call(app, "/whoami", None).await;

    assert_eq!(body, "-");
    assert!(set_cookies.is_empty());
}

#[tokio::test]
async fn test_refresh_cookie_mints_new_access_cookie() {
    let app = app(common::mock_backend().await);

    let cookie = format!("{REFRESH_COOKIE}={}", common::GOOD_REFRESH);
    let (set_cookies, body) = call(app, "/whoami", Some(&cookie)).await;

    assert_eq!(body, common::FRESH_ACCESS);
    assert_eq!(set_cookies.len(), 1);
    assert!(set_cookies[0].starts_with(&format!("{ACCESS_COOKIE}={}", common::FRESH_ACCESS)));
    assert!(set_cookies[0].contains("HttpOnly"));
}

#[tokio::test]
async fn test_rejected_refresh_leaves_request_anonymous() {
    let app = app(common::mock_backend().await);

    let cookie = format!("{REFRESH_COOKIE}=refresh-stale");
    let (set_cookies, body) = call(app, "/whoami", Some(&cookie)).await;

    assert_eq!(body, "-");
    assert!(set_cookies.is_empty());
}

#[tokio::test]
async fn test_scheduled_sign_in_sets_both_cookies() {
    let app = app(common::mock_backend().await);

    let (set_cookies, _) = call(app, "/sign-in", None).await;

    assert_eq!(set_cookies.len(), 2);
    assert!(set_cookies[0].starts_with(&format!("{ACCESS_COOKIE}=access-new")));
    assert!(set_cookies[1].starts_with(&format!("{REFRESH_COOKIE}=refresh-new")));
}

#[tokio::test]
async fn test_scheduled_sign_out_expires_cookies() {
    let app = app(common::mock_backend().await);

    let cookie = format!("{ACCESS_COOKIE}={}", common::VALID_ACCESS);
    let (set_cookies, _) = call(app, "/sign-out", Some(&cookie)).await;

    assert_eq!(set_cookies.len(), 2);
    for value in &set_cookies {
        assert!(value.contains("Max-Age=0"), "not expired: {value}");
    }
}
