use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional behaviour is active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. A missing file or field falls back to the
/// `Default` impl.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Show the distance and fare quote on the booking form.
    #[serde(default = "default_true")]
    pub fare_estimate: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            fare_estimate: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Where the RideShare REST API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Lifetimes and flags of the session cookies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    #[serde(default = "default_access_minutes")]
    pub access_cookie_minutes: i64,
    #[serde(default = "default_refresh_days")]
    pub refresh_cookie_days: i64,
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            access_cookie_minutes: default_access_minutes(),
            refresh_cookie_days: default_refresh_days(),
            secure_cookies: false,
        }
    }
}

fn default_access_minutes() -> i64 {
    24 * 60
}

fn default_refresh_days() -> i64 {
    30
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub session: SessionSettings,
}
