use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ListQuery};

use crate::common;

#[tokio::test]
async fn test_all_users_requires_admin() {
    let backend = common::mock_backend().await;

    let err = backend
        .all_users(common::VALID_ACCESS, &ListQuery::page(1))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn test_all_users_without_meta_is_single_page() {
    let backend = common::mock_backend().await;

    let page = backend
        .all_users(common::ADMIN_ACCESS, &ListQuery::page(1))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn test_all_users_search_with_no_hits() {
    let backend = common::mock_backend().await;
    let query = ListQuery {
        search: Some("nobody".into()),
        ..ListQuery::page(1)
    };

    let page = backend.all_users(common::ADMIN_ACCESS, &query).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total_pages, 0);
}

#[tokio::test]
async fn test_block_user_echoes_flag() {
    let backend = common::mock_backend().await;

    let user = backend
        .set_blocked(common::ADMIN_ACCESS, "u-42", true)
        .await
        .unwrap();

    assert_eq!(user.id, "u-42");
    assert!(user.is_blocked);
}

#[tokio::test]
async fn test_overview_completion_rate() {
    let backend = common::mock_backend().await;

    let stats = backend.overview(common::ADMIN_ACCESS).await.unwrap();

    assert_eq!(stats.total_users, 12);
    assert_eq!(stats.pending_drivers, 1);
    assert_eq!(stats.completion_rate(), 75.0);
}
