use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What went wrong, independent of where. Each kind has one HTTP status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    /// The RideShare API could not be reached or answered with a 5xx.
    Upstream,
    InternalError,
}

impl AppErrorKind {
    pub fn status(self) -> u16 {
        match self {
            AppErrorKind::BadRequest => 400,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::NotFound => 404,
            AppErrorKind::Conflict => 409,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::InternalError => 500,
            AppErrorKind::Upstream => 502,
        }
    }

    /// Shown when the server sent no usable message.
    fn fallback_message(self) -> &'static str {
        match self {
            AppErrorKind::Unauthorized => "Please sign in to continue.",
            AppErrorKind::Forbidden => "You do not have access to this.",
            AppErrorKind::Upstream => "The RideShare service is unavailable. Try again shortly.",
            _ => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Error shared by the BFF and the UI. Crosses the server-function boundary
/// as JSON inside `ServerFnError`; `field_errors` is keyed by form field,
/// with nested fields dotted (`pickup.address`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Upstream, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Map a RideShare API status code onto an error kind.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            500..=599 => AppErrorKind::Upstream,
            _ => AppErrorKind::InternalError,
        };
        Self::new(kind, message)
    }

    /// The session is gone and the user must sign in again.
    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    pub fn status_code_u16(&self) -> u16 {
        self.kind.status()
    }

    /// Recover the error from a `ServerFnError` string on the client.
    ///
    /// The payload is embedded in text such as
    /// `error running server function: {"kind":"Unauthorized",...} (details: None)`,
    /// so the outermost `{...}` span is parsed when the whole string is not JSON.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        (end > start)
            .then(|| serde_json::from_str(&error_message[start..=end]).ok())
            .flatten()
    }

    /// Per-field messages for inline form errors. Empty when there are none.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message for a toast or notice.
    pub fn friendly_message(error_string: &str) -> String {
        match Self::from_server_error(error_string) {
            Some(err) if !err.message.trim().is_empty() => err.message,
            Some(err) => err.kind.fallback_message().to_string(),
            None => AppErrorKind::InternalError.fallback_message().to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut message = "Validation failed".to_string();
        let mut field_errors = HashMap::new();
        collect_field_errors(&errors, "", &mut message, &mut field_errors);
        AppError::validation(message, field_errors)
    }
}

/// Flatten nested validation errors into dotted keys (`pickup.address`).
/// Struct-level checks land under `__all__` and become the top-level message.
#[cfg(feature = "validation")]
fn collect_field_errors(
    errors: &validator::ValidationErrors,
    prefix: &str,
    message: &mut String,
    out: &mut HashMap<String, String>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let key = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                let Some(first) = errs.first() else { continue };
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                if *field == "__all__" {
                    *message = msg;
                } else {
                    out.entry(key).or_insert(msg);
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_field_errors(inner, &key, message, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(inner, &format!("{key}[{index}]"), message, out);
                }
            }
        }
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"Unauthorized","message":"Invalid token"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid token");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"User not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "User not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_extracts_message_field() {
        let json = r#"{"kind":"Forbidden","message":"Driver is not approved"}"#;
        assert_eq!(AppError::friendly_message(json), "Driver is not approved");
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("garbage input"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn empty_message_uses_kind_fallback() {
        let json = r#"{"kind":"Upstream","message":""}"#;
        assert_eq!(
            AppError::friendly_message(json),
            "The RideShare service is unavailable. Try again shortly."
        );
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("email").unwrap(), "invalid format");
    }

    #[test]
    fn from_status_and_status_agree() {
        for code in [400, 401, 403, 404, 409, 422, 500] {
            assert_eq!(AppError::from_status(code, "x").status_code_u16(), code);
        }
        assert_eq!(AppError::from_status(503, "x").status_code_u16(), 502);
    }

    #[test]
    fn from_status_maps_backend_codes() {
        assert_eq!(AppError::from_status(401, "x").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, "x").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "x").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(409, "x").kind, AppErrorKind::Conflict);
        assert_eq!(AppError::from_status(503, "x").kind, AppErrorKind::Upstream);
        assert_eq!(AppError::from_status(418, "x").kind, AppErrorKind::InternalError);
        assert!(AppError::from_status(401, "expired").is_auth_failure());
        assert!(!AppError::from_status(403, "blocked").is_auth_failure());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn field_errors_survive_the_server_fn_wrapper() {
        let mut fields = HashMap::new();
        fields.insert("vehicle.model".to_string(), "Vehicle model is required".to_string());
        let err = AppError::validation("Validation failed", fields);
        let wrapped = format!(
            "error running server function: {} (details: None)",
            serde_json::to_string(&err).unwrap()
        );
        let parsed = AppError::parse_field_errors(&wrapped);
        assert_eq!(parsed["vehicle.model"], "Vehicle model is required");
    }
}
