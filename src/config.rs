/*
 * Responsibility
 * - Load settings from the environment (.env supported): listen port, identity provider, HTTP limits
 * - Validate values (startup fails on invalid configuration)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::services::oauth::OAuthClientConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Limits applied to every inbound request by `middleware::http`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpPolicy {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpPolicy {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub oauth_base_url: Url,
    pub oauth_timeout: Duration,

    pub http: HttpPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let oauth_base_url = lookup("OAUTH_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| OAuthClientConfig::DEFAULT_BASE_URL.to_string());
        let oauth_base_url =
            Url::parse(&oauth_base_url).map_err(|_| ConfigError::Invalid("OAUTH_BASE_URL"))?;
        if !matches!(oauth_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid("OAUTH_BASE_URL"));
        }

        let oauth_timeout = lookup("OAUTH_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(OAuthClientConfig::DEFAULT_TIMEOUT);

        let defaults = HttpPolicy::default();
        let http = HttpPolicy {
            request_timeout: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            body_limit_bytes: lookup("REQUEST_BODY_LIMIT_BYTES")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.body_limit_bytes),
        };

        Ok(Self {
            addr,
            app_env,
            oauth_base_url,
            oauth_timeout,
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.oauth_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.oauth_timeout, Duration::from_millis(200));
        assert_eq!(config.http, HttpPolicy::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "8081"),
            ("APP_ENV", "Prod"),
            ("OAUTH_BASE_URL", "https://idp.internal/api"),
            ("OAUTH_TIMEOUT_MS", "750"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("REQUEST_BODY_LIMIT_BYTES", "2048"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8081);
        assert!(config.app_env.is_production());
        assert_eq!(config.oauth_base_url.as_str(), "https://idp.internal/api");
        assert_eq!(config.oauth_timeout, Duration::from_millis(750));
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.http.body_limit_bytes, 2048);
    }

    #[test]
    fn unusable_timeout_falls_back_to_default() {
        for raw in ["0", "-1", "soon"] {
            let config = load(&[("OAUTH_TIMEOUT_MS", raw)]).unwrap();
            assert_eq!(config.oauth_timeout, OAuthClientConfig::DEFAULT_TIMEOUT, "{raw}");
        }
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert_eq!(
            load(&[("OAUTH_BASE_URL", "not a url")]).unwrap_err(),
            ConfigError::Invalid("OAUTH_BASE_URL")
        );
        assert_eq!(
            load(&[("OAUTH_BASE_URL", "ftp://idp.internal")]).unwrap_err(),
            ConfigError::Invalid("OAUTH_BASE_URL")
        );
    }
}
