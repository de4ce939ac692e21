use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use crate::backend::BackendClient;

/// Backend access token resolved for the current request.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionToken(pub String);

/// Permissive session middleware.
///
/// On each request:
/// 1. Reads the access token from the session cookie (or a Bearer header).
/// 2. Without one, exchanges the refresh cookie for a new access token.
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes.
/// 4. Applies refreshed or scheduled cookies to the response.
///
/// It never rejects a request; server functions decide what needs a session.
/// An access token the API rejects while its cookie is still alive is
/// renewed by `get_current_user` through `BackendClient::resolve_session`.
pub async fn session_middleware(
    State(backend): State<BackendClient>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refreshed: Option<String> = None;

    match cookies::extract_access_token(&headers) {
        Some(token) => {
            req.extensions_mut().insert(SessionToken(token));
        }
        None => {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                match backend.refresh(&refresh_token).await {
                    Ok(tokens) => {
                        tracing::debug!("session refreshed from refresh cookie");
                        req.extensions_mut()
                            .insert(SessionToken(tokens.access_token.clone()));
                        refreshed = Some(tokens.access_token);
                    }
                    Err(e) => {
                        tracing::info!(error = %e, "refresh token rejected, session dropped");
                    }
                }
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(access) = refreshed {
        cookies::set_session_cookies(response.headers_mut(), &access, None);
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => {
            cookies::set_session_cookies(
                response.headers_mut(),
                &access_token,
                refresh_token.as_deref(),
            );
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookies(response.headers_mut());
        }
        None => {}
    }

    response
}
