use dioxus::prelude::*;
use shared_types::{FareEstimate, GeoPoint, ListQuery, Paginated, Ride, RideRequest, VehicleType};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Rides fetched when looking for the one in progress.
#[cfg(feature = "server")]
const ACTIVE_RIDE_WINDOW: u32 = 20;

/// Price a trip with a surge multiplier drawn in `[1.0, 1.25)`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn estimate_fare(
    pickup: GeoPoint,
    destination: GeoPoint,
    vehicle_type: VehicleType,
) -> Result<FareEstimate, ServerFnError> {
    use rand::Rng;
    use shared_types::{AppError, SURGE_MAX, SURGE_MIN};

    if !crate::config::feature_flags().fare_estimate {
        return Err(AppError::forbidden("Fare estimates are turned off").into_server_fn_error());
    }
    if !pickup.is_valid() || !destination.is_valid() {
        return Err(AppError::bad_request("Coordinates are out of range").into_server_fn_error());
    }

    let surge = rand::thread_rng().gen_range(SURGE_MIN..SURGE_MAX);
    Ok(shared_types::estimate_fare(
        vehicle_type,
        pickup,
        destination,
        surge,
    ))
}

#[cfg_attr(
    feature = "server",
    tracing::instrument(skip(req), fields(vehicle = %req.vehicle_type.as_str()))
)]
#[server]
pub async fn request_ride(req: RideRequest) -> Result<Ride, ServerFnError> {
    let token = require_session()?;
    req.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let ride = backend()?
        .request_ride(&token, &req)
        .await
        .map_err(backend_error)?;
    tracing::info!(ride = %ride.id, "ride requested");
    Ok(ride)
}

/// The caller's rides, newest first as the API returns them.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn my_rides(query: ListQuery) -> Result<Paginated<Ride>, ServerFnError> {
    let token = require_session()?;
    backend()?
        .my_rides(&token, &query)
        .await
        .map_err(backend_error)
}

/// The caller's ride that has not finished yet, if any.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn active_ride() -> Result<Option<Ride>, ServerFnError> {
    let token = require_session()?;
    let query = ListQuery {
        limit: ACTIVE_RIDE_WINDOW,
        ..ListQuery::page(1)
    };
    let rides = backend()?
        .my_rides(&token, &query)
        .await
        .map_err(backend_error)?;

    Ok(shared_types::current_ride(&rides.data).cloned())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_ride(id: String) -> Result<Ride, ServerFnError> {
    let token = require_session()?;
    backend()?.ride(&token, &id).await.map_err(backend_error)
}

/// Cancel a ride. Riders may only cancel while it is still requested.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn cancel_ride(id: String) -> Result<Ride, ServerFnError> {
    use shared_types::AppError;

    let token = require_session()?;
    let client = backend()?;

    let ride = client.ride(&token, &id).await.map_err(backend_error)?;
    if !ride.status.rider_can_cancel() {
        return Err(AppError::conflict(format!(
            "A ride that is {} can no longer be cancelled",
            ride.status.label().to_lowercase()
        ))
        .into_server_fn_error());
    }

    let ride = client.cancel_ride(&token, &id).await.map_err(backend_error)?;
    tracing::info!(ride = %ride.id, "ride cancelled");
    Ok(ride)
}
