//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use chrono::TimeDelta;
use url::Url;

use crate::completion::OpenRouterConfig;
use crate::service::{PremiumSource, Session};
use crate::storage::DEFAULT_FRAME_TTL_HOURS;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is not a socket address.
    #[error("invalid LISTEN_ADDR: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),

    /// `PUBLIC_BASE_URL` is not an absolute http(s) URL.
    #[error("invalid PUBLIC_BASE_URL {value:?}: {reason}")]
    BaseUrl {
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`SparkConfig::from_env`].
#[derive(Clone)]
pub struct SparkConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Public base URL used for absolute links in shared artifacts.
    pub public_base_url: Url,

    /// API key for the completion provider. Empty disables remote calls.
    pub completion_api_key: String,

    /// Completion API root.
    pub completion_base_url: String,

    /// Model slug.
    pub completion_model: String,

    /// Per-request timeout for completion calls.
    pub completion_timeout: Duration,

    /// JSON store location; `None` keeps everything in memory.
    pub store_path: Option<PathBuf>,

    /// How long a shared frame stays viewable.
    pub frame_ttl_hours: i64,

    /// Identifier stamped on saved ideas.
    pub session_user_id: String,

    /// Premium override; `None` defers to the stored flag.
    pub premium_override: Option<bool>,
}

impl std::fmt::Debug for SparkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkConfig")
            .field("listen_addr", &self.listen_addr)
            .field("public_base_url", &self.public_base_url.as_str())
            .field("completion_api_key", &redact(&self.completion_api_key))
            .field("completion_base_url", &self.completion_base_url)
            .field("completion_model", &self.completion_model)
            .field("completion_timeout", &self.completion_timeout)
            .field("store_path", &self.store_path)
            .field("frame_ttl_hours", &self.frame_ttl_hours)
            .field("session_user_id", &self.session_user_id)
            .field("premium_override", &self.premium_override)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

impl SparkConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `LISTEN_ADDR` or `PUBLIC_BASE_URL` is set
    /// but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`SparkConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()?;

        let public_base_url = parse_base_url(
            &lookup("PUBLIC_BASE_URL").unwrap_or_else(|| "http://localhost:3000".to_string()),
        )?;

        let completion_api_key = lookup("OPENROUTER_API_KEY").unwrap_or_default();
        let completion_base_url = lookup("COMPLETION_BASE_URL")
            .unwrap_or_else(|| "https://openrouter.ai/api/v1".to_string());
        let completion_model = lookup("COMPLETION_MODEL")
            .unwrap_or_else(|| "google/gemini-2.0-flash-001".to_string());
        let completion_timeout =
            Duration::from_secs(parse_var(&lookup, "COMPLETION_TIMEOUT_SECS", 30));

        let store_path = lookup("STORE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let frame_ttl_hours = parse_var(&lookup, "FRAME_TTL_HOURS", DEFAULT_FRAME_TTL_HOURS).max(1);
        let session_user_id = lookup("SESSION_USER_ID")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| "current_user".to_string());
        let premium_override = parse_bool(lookup("PREMIUM_ENABLED").as_deref());

        Ok(Self {
            listen_addr,
            public_base_url,
            completion_api_key,
            completion_base_url,
            completion_model,
            completion_timeout,
            store_path,
            frame_ttl_hours,
            session_user_id,
            premium_override,
        })
    }

    /// Session derived from the user id and premium override.
    #[must_use]
    pub fn session(&self) -> Session {
        let premium = self
            .premium_override
            .map_or(PremiumSource::Stored, PremiumSource::Fixed);
        Session::new(self.session_user_id.clone(), premium)
    }

    /// Completion client settings.
    #[must_use]
    pub fn completion(&self) -> OpenRouterConfig {
        OpenRouterConfig {
            base_url: self.completion_base_url.clone(),
            api_key: self.completion_api_key.clone(),
            model: self.completion_model.clone(),
            timeout: self.completion_timeout,
        }
    }

    /// Frame display window.
    #[must_use]
    pub fn frame_ttl(&self) -> TimeDelta {
        TimeDelta::try_hours(self.frame_ttl_hours).unwrap_or(TimeDelta::MAX)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let reject = |reason: &str| ConfigError::BaseUrl {
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let url = Url::parse(raw).map_err(|e| reject(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(reject("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(reject("cannot be used as a base"));
    }
    Ok(url)
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Parses a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `None` otherwise.
fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true" | "1") => Some(true),
        Some("false" | "0") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<SparkConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SparkConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let Ok(config) = load(&[]) else {
            panic!("defaults should load");
        };
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.public_base_url.as_str(), "http://localhost:3000/");
        assert!(config.completion_api_key.is_empty());
        assert_eq!(config.completion_model, "google/gemini-2.0-flash-001");
        assert_eq!(config.completion_timeout, Duration::from_secs(30));
        assert!(config.store_path.is_none());
        assert_eq!(config.frame_ttl_hours, 24);
        assert_eq!(config.session_user_id, "current_user");
        assert_eq!(config.premium_override, None);
        assert_eq!(config.session(), Session::default());
    }

    #[test]
    fn overrides() {
        let Ok(config) = load(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("PUBLIC_BASE_URL", "https://spark.example"),
            ("OPENROUTER_API_KEY", "sk-123"),
            ("STORE_PATH", "/tmp/spark.json"),
            ("FRAME_TTL_HOURS", "48"),
            ("PREMIUM_ENABLED", "TRUE"),
            ("SESSION_USER_ID", "alice"),
        ]) else {
            panic!("overrides should load");
        };
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.public_base_url.host_str(), Some("spark.example"));
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/spark.json")));
        assert_eq!(config.frame_ttl_hours, 48);
        assert_eq!(config.premium_override, Some(true));
        assert_eq!(config.session_user_id, "alice");
        assert!(!format!("{config:?}").contains("sk-123"));
        assert_eq!(config.completion().api_key, "sk-123");
        assert_eq!(config.frame_ttl(), TimeDelta::hours(48));
        assert_eq!(config.session(), Session::new("alice", PremiumSource::Fixed(true)));
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            load(&[("LISTEN_ADDR", "nope")]),
            Err(ConfigError::ListenAddr(_))
        ));
        assert!(matches!(
            load(&[("PUBLIC_BASE_URL", "ftp://files.example")]),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            load(&[("PUBLIC_BASE_URL", "not a url")]),
            Err(ConfigError::BaseUrl { .. })
        ));
        let Ok(config) = load(&[("FRAME_TTL_HOURS", "abc"), ("PREMIUM_ENABLED", "maybe")]) else {
            panic!("lenient values fall back");
        };
        assert_eq!(config.frame_ttl_hours, 24);
        assert_eq!(config.premium_override, None);
    }
}
