use dioxus::prelude::*;
use shared_types::{DriverEarnings, Ride, RideStatus, SessionUser};

#[cfg(feature = "server")]
use super::auth::*;

/// Open ride requests waiting for a driver.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn available_rides() -> Result<Vec<Ride>, ServerFnError> {
    let token = require_session()?;
    backend()?
        .available_rides(&token)
        .await
        .map_err(backend_error)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn accept_ride(id: String) -> Result<Ride, ServerFnError> {
    let token = require_session()?;
    let ride = backend()?
        .accept_ride(&token, &id)
        .await
        .map_err(backend_error)?;
    tracing::info!(ride = %ride.id, "ride accepted");
    Ok(ride)
}

/// Move a trip one step along accepted → picked up → in transit → completed.
///
/// `current` is the status the driver is looking at; a stale view is
/// rejected by the API rather than skipping a step.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn advance_ride(id: String, current: RideStatus) -> Result<Ride, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    let token = require_session()?;
    let Some(next) = current.next() else {
        return Err(AppError::conflict(format!(
            "A ride that is {} cannot move forward",
            current.label().to_lowercase()
        ))
        .into_server_fn_error());
    };

    let ride = backend()?
        .update_ride_status(&token, &id, next)
        .await
        .map_err(backend_error)?;
    tracing::info!(ride = %ride.id, status = ride.status.as_str(), "ride advanced");
    Ok(ride)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn driver_earnings() -> Result<DriverEarnings, ServerFnError> {
    let token = require_session()?;
    backend()?.earnings(&token).await.map_err(backend_error)
}

/// Go online or offline. Returns the updated driver profile.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_availability(is_online: bool) -> Result<SessionUser, ServerFnError> {
    let token = require_session()?;
    backend()?
        .set_availability(&token, is_online)
        .await
        .map_err(backend_error)
}
