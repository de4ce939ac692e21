use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ListQuery, RideStatus, VehicleType};

use crate::common;

#[tokio::test]
async fn test_my_rides_reads_page_meta() {
    let backend = common::mock_backend().await;

    let page = backend
        .my_rides(common::VALID_ACCESS, &ListQuery::page(2))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "r-2");
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.total, 21);
    assert_eq!(page.meta.total_pages, 3);
    assert!(page.meta.has_next());
    assert!(page.meta.has_prev());
}

#[tokio::test]
async fn test_my_rides_forwards_status_filter() {
    let backend = common::mock_backend().await;
    let query = ListQuery {
        status: Some("in_transit".into()),
        ..ListQuery::page(1)
    };

    let page = backend.my_rides(common::VALID_ACCESS, &query).await.unwrap();

    assert_eq!(page.data[0].status, RideStatus::InTransit);
}

#[tokio::test]
async fn test_ride_fields_decode() {
    let backend = common::mock_backend().await;

    let page = backend
        .my_rides(common::VALID_ACCESS, &ListQuery::page(1))
        .await
        .unwrap();
    let ride = &page.data[0];

    assert_eq!(ride.vehicle_type, VehicleType::Comfort);
    assert_eq!(ride.pickup.address, "1 Main St");
    assert_eq!(ride.pickup.point.lat, 40.7128);
    assert_eq!(ride.distance_km, 6.2);
    assert!(ride.driver.is_none());
    assert_eq!(shared_types::party_name(ride.driver.as_ref()), "\u{2014}");
}

#[tokio::test]
async fn test_available_rides_without_meta() {
    let backend = common::mock_backend().await;

    let rides = backend.available_rides(common::VALID_ACCESS).await.unwrap();

    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].status, RideStatus::Requested);
}

#[tokio::test]
async fn test_accept_taken_ride_is_conflict() {
    let backend = common::mock_backend().await;

    let accepted = backend.accept_ride(common::VALID_ACCESS, "r-open").await.unwrap();
    assert_eq!(accepted.status, RideStatus::Accepted);

    let err = backend
        .accept_ride(common::VALID_ACCESS, "r-taken")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Ride already accepted");
}

#[tokio::test]
async fn test_status_update_sends_next_status() {
    let backend = common::mock_backend().await;
    let next = RideStatus::Accepted.next().unwrap();

    let ride = backend
        .update_ride_status(common::VALID_ACCESS, "r-1", next)
        .await
        .unwrap();

    assert_eq!(ride.status, RideStatus::PickedUp);
}

#[tokio::test]
async fn test_server_error_maps_to_upstream() {
    let backend = common::mock_backend().await;

    let err = backend.earnings(common::VALID_ACCESS).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Internal Server Error");
}
