use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, RegisterRequest, Role};
use server::backend::SessionLookup;

use crate::common;

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_tokens_and_user() {
    let backend = common::mock_backend().await;

    let response = backend
        .login(&login_request("riley@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(response.access_token, common::VALID_ACCESS);
    assert_eq!(response.refresh_token.as_deref(), Some(common::GOOD_REFRESH));
    assert_eq!(response.user.id, "u-rider");
    assert_eq!(response.user.role, Role::Rider);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let backend = common::mock_backend().await;

    let err = backend
        .login(&login_request("riley@example.com", "nope-nope"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let backend = common::mock_backend().await;

    let user = backend.me(common::VALID_ACCESS).await.unwrap();

    let user = user.expect("valid token should resolve a user");
    assert_eq!(user.email, "riley@example.com");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
}

#[tokio::test]
async fn test_me_with_rejected_token_is_none() {
    let backend = common::mock_backend().await;

    let user = backend.me("access-expired").await.unwrap();

    assert!(user.is_none());
}

#[tokio::test]
async fn test_me_backend_failure_is_error() {
    let backend = common::mock_backend().await;

    let err = backend.me("access-broken").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_me_unreachable_backend_is_error() {
    let backend = common::unreachable_backend();

    let err = backend.me(common::VALID_ACCESS).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_refresh_exchanges_token() {
    let backend = common::mock_backend().await;

    let fresh = backend.refresh(common::GOOD_REFRESH).await.unwrap();
    assert_eq!(fresh.access_token, common::FRESH_ACCESS);

    let err = backend.refresh("refresh-stale").await.unwrap_err();
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_resolve_session_keeps_accepted_token() {
    let backend = common::mock_backend().await;

    let lookup = backend
        .resolve_session(common::VALID_ACCESS, Some(common::GOOD_REFRESH))
        .await
        .unwrap();

    assert!(matches!(lookup, SessionLookup::Active(ref user) if user.email == "riley@example.com"));
}

#[tokio::test]
async fn test_resolve_session_renews_rejected_access_token() {
    let backend = common::mock_backend().await;

    let lookup = backend
        .resolve_session("access-expired", Some(common::GOOD_REFRESH))
        .await
        .unwrap();

    match lookup {
        SessionLookup::Refreshed { user, access_token } => {
            assert_eq!(access_token, common::FRESH_ACCESS);
            assert_eq!(user.email, "riley@example.com");
        }
        other => panic!("expected a renewed session, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_session_ends_without_usable_refresh() {
    let backend = common::mock_backend().await;

    let no_refresh = backend.resolve_session("access-expired", None).await.unwrap();
    assert_eq!(no_refresh, SessionLookup::Ended);

    let stale = backend
        .resolve_session("access-expired", Some("refresh-stale"))
        .await
        .unwrap();
    assert_eq!(stale, SessionLookup::Ended);
}

#[tokio::test]
async fn test_resolve_session_surfaces_backend_failure() {
    let backend = common::mock_backend().await;

    let err = backend
        .resolve_session("access-broken", Some(common::GOOD_REFRESH))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn test_register_maps_error_sources_to_fields() {
    let backend = common::mock_backend().await;
    let req = RegisterRequest {
        name: "Taken Person".into(),
        email: "taken@example.com".into(),
        password: "secret123".into(),
        phone: None,
        role: Role::Rider,
        vehicle: None,
    };

    let err = backend.register(&req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Validation Error");
    assert_eq!(err.field_errors.len(), 1);
    assert_eq!(err.field_errors["email"], "Email already exists");
}

#[tokio::test]
async fn test_register_driver_returns_pending_account() {
    let backend = common::mock_backend().await;
    let req = RegisterRequest {
        name: "Dana Driver".into(),
        email: "dana@example.com".into(),
        password: "secret123".into(),
        phone: Some("555-0199".into()),
        role: Role::Driver,
        vehicle: None,
    };

    let user = backend.register(&req).await.unwrap();

    assert_eq!(user.role, Role::Driver);
    assert!(!user.is_approved);
    assert!(!user.can_drive());
}

#[tokio::test]
async fn test_logout_without_token_succeeds() {
    let backend = common::mock_backend().await;
    backend.logout(None).await.unwrap();
}
