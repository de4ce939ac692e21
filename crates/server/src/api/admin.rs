use dioxus::prelude::*;
use shared_types::{AdminStats, ListQuery, Paginated, Ride, SessionUser};

#[cfg(feature = "server")]
use super::auth::*;

/// Platform totals for the admin overview.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_overview() -> Result<AdminStats, ServerFnError> {
    let token = require_session()?;
    backend()?.overview(&token).await.map_err(backend_error)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users(query: ListQuery) -> Result<Paginated<SessionUser>, ServerFnError> {
    let token = require_session()?;
    backend()?
        .all_users(&token, &query)
        .await
        .map_err(backend_error)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_user_blocked(id: String, is_blocked: bool) -> Result<SessionUser, ServerFnError> {
    let token = require_session()?;
    let user = backend()?
        .set_blocked(&token, &id, is_blocked)
        .await
        .map_err(backend_error)?;
    tracing::info!(user = %user.id, is_blocked, "user block state changed");
    Ok(user)
}

/// Approve or suspend a driver account.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_driver_approval(
    id: String,
    is_approved: bool,
) -> Result<SessionUser, ServerFnError> {
    let token = require_session()?;
    let user = backend()?
        .set_approval(&token, &id, is_approved)
        .await
        .map_err(backend_error)?;
    tracing::info!(user = %user.id, is_approved, "driver approval changed");
    Ok(user)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_rides(query: ListQuery) -> Result<Paginated<Ride>, ServerFnError> {
    let token = require_session()?;
    backend()?
        .all_rides(&token, &query)
        .await
        .map_err(backend_error)
}
