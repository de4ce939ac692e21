//! HTTP client for the RideShare REST API.
//!
//! Every response is wrapped in an [`ApiEnvelope`]. Non-2xx answers are
//! mapped onto [`AppError`] using the envelope's message when present.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{
    AdminStats, ApiEnvelope, AppError, AppErrorKind, ApprovalUpdate, AvailabilityUpdate, BackendSettings,
    BlockUpdate, ChangePasswordRequest, DriverEarnings, ListQuery, LoginRequest, LoginResponse,
    Paginated, RefreshResponse, RegisterRequest, Ride, RideRequest, RideStatus, RideStatusUpdate,
    SessionUser, UpdateProfileRequest,
};
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

static SHARED: OnceLock<BackendClient> = OnceLock::new();

/// Install the process-wide client used by server functions.
pub fn init_shared(client: BackendClient) -> &'static BackendClient {
    SHARED.get_or_init(|| client)
}

/// The client installed at startup.
pub fn shared() -> Result<&'static BackendClient, AppError> {
    SHARED
        .get()
        .ok_or_else(|| AppError::internal("Backend client is not initialised"))
}

/// Result of checking a session's tokens against the API.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    /// The access token is still accepted.
    Active(SessionUser),
    /// The access token was rejected and the refresh token minted a new one.
    Refreshed {
        user: SessionUser,
        access_token: String,
    },
    /// Neither token is usable; the session is over.
    Ended,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body of a failed request. Validation failures list offending fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    error_sources: Vec<ErrorSource>,
}

#[derive(Debug, Deserialize)]
struct ErrorSource {
    #[serde(default)]
    path: String,
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rideshare-bff/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self, AppError> {
        Self::new(
            settings.base_url.clone(),
            Duration::from_secs(settings.timeout_secs.max(1)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(t) => builder.bearer_auth(t),
            None => builder,
        }
    }

    /// Send a request and decode the envelope, mapping error statuses.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, AppError> {
        let response = builder.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();

        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(error_from_body(status, body));
        }

        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| e.into_app_error())
    }

    /// Like [`send`](Self::send) but requires the envelope to carry data.
    async fn data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        self.send::<T>(builder)
            .await?
            .data
            .ok_or_else(|| AppError::upstream("The RideShare service returned no data"))
    }

    async fn page<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Paginated<T>, AppError> {
        let envelope = self.send::<Vec<T>>(builder).await?;
        let data = envelope.data.unwrap_or_default();
        Ok(match envelope.meta {
            Some(meta) => Paginated { data, meta },
            None => Paginated::single_page(data),
        })
    }

    // ── auth ──────────────────────────────────────────────

    /// `GET users/me`. A rejected token yields `Ok(None)`; transport and
    /// server failures are errors.
    #[tracing::instrument(skip_all)]
    pub async fn me(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        match self
            .data::<SessionUser>(self.request(Method::GET, "users/me", Some(token)))
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(e) if matches!(e.kind, AppErrorKind::Unauthorized | AppErrorKind::Forbidden) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// `me`, retried once with a freshly minted access token when the API
    /// rejects the current one and a refresh token is at hand.
    pub async fn resolve_session(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> Result<SessionLookup, AppError> {
        if let Some(user) = self.me(access_token).await? {
            return Ok(SessionLookup::Active(user));
        }
        let Some(refresh_token) = refresh_token else {
            return Ok(SessionLookup::Ended);
        };
        let fresh = match self.refresh(refresh_token).await {
            Ok(fresh) => fresh,
            Err(e) if e.is_auth_failure() || e.kind == AppErrorKind::Forbidden => {
                tracing::debug!("refresh token rejected");
                return Ok(SessionLookup::Ended);
            }
            Err(e) => return Err(e),
        };
        Ok(match self.me(&fresh.access_token).await? {
            Some(user) => SessionLookup::Refreshed {
                user,
                access_token: fresh.access_token,
            },
            None => SessionLookup::Ended,
        })
    }

    #[tracing::instrument(skip_all, fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.data(self.request(Method::POST, "auth/login", None).json(req))
            .await
    }

    pub async fn logout(&self, token: Option<&str>) -> Result<(), AppError> {
        self.send::<serde_json::Value>(self.request(Method::POST, "auth/logout", token))
            .await
            .map(|_| ())
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let builder = self
            .request(Method::POST, "auth/refresh-token", None)
            .header(
                reqwest::header::COOKIE,
                format!("refreshToken={refresh_token}"),
            )
            .json(&RefreshBody { refresh_token });
        self.data(builder).await
    }

    // ── users ─────────────────────────────────────────────

    #[tracing::instrument(skip_all, fields(email = %req.email, role = %req.role))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<SessionUser, AppError> {
        self.data(self.request(Method::POST, "users/register", None).json(req))
            .await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        req: &UpdateProfileRequest,
    ) -> Result<SessionUser, AppError> {
        self.data(
            self.request(Method::PATCH, "users/updateOwnProfile", Some(token))
                .json(req),
        )
        .await
    }

    pub async fn change_password(
        &self,
        token: &str,
        req: &ChangePasswordRequest,
    ) -> Result<(), AppError> {
        self.send::<serde_json::Value>(
            self.request(Method::PATCH, "users/change-password", Some(token))
                .json(req),
        )
        .await
        .map(|_| ())
    }

    // ── rides ─────────────────────────────────────────────

    pub async fn request_ride(&self, token: &str, req: &RideRequest) -> Result<Ride, AppError> {
        self.data(self.request(Method::POST, "rides/request", Some(token)).json(req))
            .await
    }

    pub async fn my_rides(&self, token: &str, query: &ListQuery) -> Result<Paginated<Ride>, AppError> {
        self.page(
            self.request(Method::GET, "rides/me", Some(token))
                .query(&query.to_query_pairs()),
        )
        .await
    }

    pub async fn ride(&self, token: &str, id: &str) -> Result<Ride, AppError> {
        self.data(self.request(Method::GET, &format!("rides/{id}"), Some(token)))
            .await
    }

    pub async fn cancel_ride(&self, token: &str, id: &str) -> Result<Ride, AppError> {
        self.data(self.request(Method::PATCH, &format!("rides/{id}/cancel"), Some(token)))
            .await
    }

    pub async fn available_rides(&self, token: &str) -> Result<Vec<Ride>, AppError> {
        Ok(self
            .send::<Vec<Ride>>(self.request(Method::GET, "rides/available", Some(token)))
            .await?
            .data
            .unwrap_or_default())
    }

    pub async fn accept_ride(&self, token: &str, id: &str) -> Result<Ride, AppError> {
        self.data(self.request(Method::PATCH, &format!("rides/{id}/accept"), Some(token)))
            .await
    }

    pub async fn update_ride_status(
        &self,
        token: &str,
        id: &str,
        status: RideStatus,
    ) -> Result<Ride, AppError> {
        self.data(
            self.request(Method::PATCH, &format!("rides/{id}/status"), Some(token))
                .json(&RideStatusUpdate { status }),
        )
        .await
    }

    // ── drivers ───────────────────────────────────────────

    pub async fn earnings(&self, token: &str) -> Result<DriverEarnings, AppError> {
        self.data(self.request(Method::GET, "drivers/earnings", Some(token)))
            .await
    }

    pub async fn set_availability(&self, token: &str, is_online: bool) -> Result<SessionUser, AppError> {
        self.data(
            self.request(Method::PATCH, "drivers/availability", Some(token))
                .json(&AvailabilityUpdate { is_online }),
        )
        .await
    }

    // ── admin ─────────────────────────────────────────────

    pub async fn all_users(
        &self,
        token: &str,
        query: &ListQuery,
    ) -> Result<Paginated<SessionUser>, AppError> {
        self.page(
            self.request(Method::GET, "users/all", Some(token))
                .query(&query.to_query_pairs()),
        )
        .await
    }

    pub async fn set_blocked(&self, token: &str, id: &str, is_blocked: bool) -> Result<SessionUser, AppError> {
        self.data(
            self.request(Method::PATCH, &format!("users/{id}/block"), Some(token))
                .json(&BlockUpdate { is_blocked }),
        )
        .await
    }

    pub async fn set_approval(
        &self,
        token: &str,
        id: &str,
        is_approved: bool,
    ) -> Result<SessionUser, AppError> {
        self.data(
            self.request(Method::PATCH, &format!("drivers/{id}/approval"), Some(token))
                .json(&ApprovalUpdate { is_approved }),
        )
        .await
    }

    pub async fn all_rides(&self, token: &str, query: &ListQuery) -> Result<Paginated<Ride>, AppError> {
        self.page(
            self.request(Method::GET, "rides/all", Some(token))
                .query(&query.to_query_pairs()),
        )
        .await
    }

    pub async fn overview(&self, token: &str) -> Result<AdminStats, AppError> {
        self.data(self.request(Method::GET, "stats/overview", Some(token)))
            .await
    }

    /// Whether the API answers at all. Any HTTP response counts as reachable.
    pub async fn ping(&self) -> bool {
        self.http.get(&self.base_url).send().await.is_ok()
    }
}

fn error_from_body(status: StatusCode, body: ErrorBody) -> AppError {
    let message = if body.message.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        body.message
    };

    let mut err = AppError::from_status(status.as_u16(), message);
    if !body.error_sources.is_empty() {
        let fields: HashMap<String, String> = body
            .error_sources
            .into_iter()
            .filter(|s| !s.path.is_empty())
            .map(|s| (s.path, s.message))
            .collect();
        err.field_errors = fields;
    }
    err
}
