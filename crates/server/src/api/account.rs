use dioxus::prelude::*;
use shared_types::{
    ChangePasswordRequest, FeatureFlags, MessageResponse, RegisterRequest, SessionUser,
};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Current feature flags. No session required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(*crate::config::feature_flags())
}

/// Resolve the signed-in user from the session cookie.
///
/// `Ok(None)` means nobody is signed in (no cookie, or the API rejected both
/// tokens). A rejected access token is renewed from the refresh cookie. Transport and server failures are returned as errors so the
/// caller can log them.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::backend::SessionLookup;

    let Some(token) = session_token() else {
        return Ok(None);
    };

    match backend()?.resolve_session(&token, refresh_token().as_deref()).await {
        Ok(SessionLookup::Active(user)) => Ok(Some(user)),
        Ok(SessionLookup::Refreshed { user, access_token }) => {
            tracing::debug!(user = %user.id, "access token renewed");
            cookies::schedule_session_cookies(&access_token, None);
            Ok(Some(user))
        }
        Ok(SessionLookup::Ended) => {
            tracing::debug!("session tokens rejected, clearing cookies");
            cookies::schedule_clear_cookies();
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(error = %e, "session lookup failed");
            Err(e.into_server_fn_error())
        }
    }
}

/// Sign in with email and password; stores the token pair in HTTP-only cookies.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.trim().to_lowercase(),
        password,
    };
    req.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    let session = backend()?
        .login(&req)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if session.user.is_blocked {
        tracing::info!(user = %session.user.id, "blocked account tried to sign in");
        return Err(shared_types::AppError::forbidden("Your account has been blocked")
            .into_server_fn_error());
    }

    cookies::schedule_session_cookies(&session.access_token, session.refresh_token.as_deref());
    tracing::info!(user = %session.user.id, role = %session.user.role, "signed in");
    Ok(session.user)
}

/// Sign out. The API call is best effort; cookies are always cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    let token = session_token();
    if let Err(e) = backend()?.logout(token.as_deref()).await {
        tracing::warn!(error = %e, "backend logout failed");
    }

    cookies::schedule_clear_cookies();
    Ok(())
}

/// Create a rider or driver account. The caller signs in afterwards.
#[cfg_attr(
    feature = "server",
    tracing::instrument(skip(req), fields(email = %req.email, role = %req.role))
)]
#[server]
pub async fn register(req: RegisterRequest) -> Result<SessionUser, ServerFnError> {
    let mut req = req;
    req.email = req.email.trim().to_lowercase();
    req.name = req.name.trim().to_string();
    req.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    backend()?
        .register(&req)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Update the signed-in user's name, phone and address. Blank fields are left unchanged.
#[cfg_attr(feature = "server", tracing::instrument(skip_all))]
#[server]
pub async fn update_profile(
    name: String,
    phone: String,
    address: String,
) -> Result<SessionUser, ServerFnError> {
    use shared_types::{AppError, UpdateProfileRequest};

    let token = require_session()?;
    let req = UpdateProfileRequest::from_form(&name, &phone, &address);
    if req.is_empty() {
        return Err(AppError::bad_request("Nothing to update").into_server_fn_error());
    }
    req.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    backend()?
        .update_profile(&token, &req)
        .await
        .map_err(backend_error)
}

#[cfg_attr(feature = "server", tracing::instrument(skip_all))]
#[server]
pub async fn change_password(
    old_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_session()?;
    let req = ChangePasswordRequest {
        old_password,
        new_password,
        confirm_password,
    };
    req.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    backend()?
        .change_password(&token, &req)
        .await
        .map_err(backend_error)?;

    Ok(MessageResponse::new("Password changed"))
}

/// Accept a message from the public contact form.
#[cfg_attr(feature = "server", tracing::instrument(skip(message)))]
#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<MessageResponse, ServerFnError> {
    use shared_types::ContactMessage;

    let msg = ContactMessage {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
    };
    msg.validate_request()
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(
        from = %msg.email,
        length = msg.message.len(),
        "contact message received"
    );
    Ok(MessageResponse::new("Thanks! We'll get back to you soon."))
}
