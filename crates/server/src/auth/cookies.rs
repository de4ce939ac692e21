use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{time::Duration, Cookie, SameSite};
use std::sync::{Arc, Mutex};

use crate::config;

pub const ACCESS_COOKIE: &str = "rs_access";
pub const REFRESH_COOKIE: &str = "rs_refresh";

/// Attributes shared by both session cookies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    pub secure: bool,
    pub domain: Option<String>,
}

impl CookieOptions {
    pub fn from_config() -> Self {
        Self {
            secure: config::app_config().session.secure_cookies,
            domain: config::cookie_domain(),
        }
    }
}

/// Build an HTTP-only, `SameSite=Lax` session cookie header.
/// Returns `None` if the token contains bytes not allowed in a header.
pub fn build_cookie(
    name: &'static str,
    value: &str,
    max_age: Duration,
    options: &CookieOptions,
) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(options.secure);

    if let Some(domain) = &options.domain {
        cookie = cookie.domain(domain.clone());
    }

    HeaderValue::from_str(&cookie.build().to_string()).ok()
}

/// Append Set-Cookie headers for a fresh token pair. A missing refresh
/// token leaves the existing refresh cookie untouched.
pub fn set_session_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: Option<&str>) {
    let session = &config::app_config().session;
    let options = CookieOptions::from_config();

    let access = build_cookie(
        ACCESS_COOKIE,
        access_token,
        Duration::minutes(session.access_cookie_minutes),
        &options,
    );
    let refresh = refresh_token.and_then(|token| {
        build_cookie(
            REFRESH_COOKIE,
            token,
            Duration::days(session.refresh_cookie_days),
            &options,
        )
    });

    for value in [access, refresh].into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Append Set-Cookie headers that expire both session cookies.
pub fn clear_session_cookies(headers: &mut HeaderMap) {
    let options = CookieOptions::from_config();
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        if let Some(value) = build_cookie(name, "", Duration::ZERO, &options) {
            headers.append(header::SET_COOKIE, value);
        }
    }
}

/// Access token from the session cookie, or a Bearer header for API clients.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

/// Parse one cookie value out of all `Cookie` headers. Empty values count as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Cookie change requested by a server function, applied by the session
/// middleware once the response is built.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: Option<String>,
    },
    Clear,
}

/// Request-extension slot through which server functions hand cookie
/// actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut guard| guard.take())
    }
}

fn schedule(action: PendingCookieAction) {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        tracing::warn!("cookie action scheduled outside a request");
        return;
    };
    let parts = ctx.parts_mut();
    match parts.extensions.get::<CookieSlot>() {
        Some(slot) => slot.put(action),
        None => tracing::warn!("no CookieSlot on request; is the session middleware installed?"),
    }
}

/// Ask the middleware to store a new token pair.
pub fn schedule_session_cookies(access_token: &str, refresh_token: Option<&str>) {
    schedule(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.map(String::from),
    });
}

/// Ask the middleware to expire both session cookies.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn cookie_is_http_only_lax_and_scoped_to_root() {
        let value = build_cookie(
            ACCESS_COOKIE,
            "abc",
            Duration::minutes(5),
            &CookieOptions::default(),
        )
        .unwrap();
        let s = value.to_str().unwrap();
        assert!(s.starts_with("rs_access=abc"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Lax"));
        assert!(s.contains("Path=/"));
        assert!(s.contains("Max-Age=300"));
        assert!(!s.contains("Secure"));
    }

    #[test]
    fn secure_and_domain_options_apply() {
        let options = CookieOptions {
            secure: true,
            domain: Some("rideshare.dev".into()),
        };
        let value = build_cookie(REFRESH_COOKIE, "r", Duration::days(1), &options).unwrap();
        let s = value.to_str().unwrap();
        assert!(s.contains("Secure"));
        assert!(s.contains("Domain=rideshare.dev"));
    }

    #[test]
    fn extract_cookie_finds_named_value() {
        let headers = with_cookie("theme=dark; rs_access=tok123; rs_refresh=ref456");
        assert_eq!(extract_access_token(&headers).as_deref(), Some("tok123"));
        assert_eq!(extract_refresh_token(&headers).as_deref(), Some("ref456"));
    }

    #[test]
    fn empty_cookie_counts_as_missing() {
        let headers = with_cookie("rs_access=; rs_refresh=ref");
        assert_eq!(extract_cookie(&headers, ACCESS_COOKIE), None);
    }

    #[test]
    fn bearer_header_is_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("xyz"));

        headers.insert(header::COOKIE, HeaderValue::from_static("rs_access=fromcookie"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("fromcookie"));
    }

    #[test]
    fn clear_emits_two_expired_cookies() {
        let mut headers = HeaderMap::new();
        clear_session_cookies(&mut headers);
        let values: Vec<&str> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.contains("Max-Age=0")));
    }

    #[test]
    fn cookie_slot_hands_over_once() {
        let slot = CookieSlot::default();
        slot.put(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }
}
