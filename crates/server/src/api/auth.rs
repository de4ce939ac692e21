// Server-only session helpers for server functions.
// Shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind};

use crate::auth::{cookies, SessionToken};
use crate::backend::{self, BackendClient};
use crate::error_convert::AppErrorExt;

/// Access token for the current request.
/// Reads the middleware-injected `SessionToken` first, falls back to cookie parsing.
pub(crate) fn session_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(SessionToken(token)) = parts.extensions.get::<SessionToken>() {
        return Some(token.clone());
    }

    cookies::extract_access_token(&parts.headers)
}

/// Refresh token from the request cookies, if the browser still holds one.
pub(crate) fn refresh_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    cookies::extract_refresh_token(&parts.headers)
}

/// The caller's access token or an "Authentication required" error.
pub(crate) fn require_session() -> Result<String, ServerFnError> {
    session_token()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

pub(crate) fn backend() -> Result<&'static BackendClient, ServerFnError> {
    backend::shared().map_err(AppErrorExt::into_server_fn_error)
}

/// Convert a failed backend call. A rejected token also drops the session
/// cookies so the next page load starts signed out.
pub(crate) fn backend_error(err: AppError) -> ServerFnError {
    if err.kind == AppErrorKind::Unauthorized {
        cookies::schedule_clear_cookies();
    }
    err.into_server_fn_error()
}
