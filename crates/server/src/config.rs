use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `.env` and `config.toml`, apply environment overrides, and store the
/// result in the global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file falls back to `AppConfig::default()`.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        tracing::info!(
            backend = %config.backend.base_url,
            features = ?config.features,
            "configuration loaded"
        );
        config
    })
}

/// Parse config text, falling back to defaults on a syntax error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply `RIDESHARE_API_URL` and `COOKIE_SECURE` on top of the file values.
pub fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(url) = var("RIDESHARE_API_URL").filter(|v| !v.trim().is_empty()) {
        config.backend.base_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(secure) = var("COOKIE_SECURE").and_then(|v| v.parse().ok()) {
        config.session.secure_cookies = secure;
    }
}

/// The loaded configuration, or defaults if `load_config()` hasn't run yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

/// Optional `Domain` attribute for session cookies.
pub fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}
