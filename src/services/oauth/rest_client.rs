//! REST client for the OAuth identity provider.
//!
//! `GET {base_url}/oauth/access_token/{token_id}` with a fixed per-call
//! timeout. A single attempt is made; there is no retry.
//!
//! Response interpretation:
//! - token id that cannot be a path segment (`.`, `..`, empty) => 404 `ApiError`, no request sent
//! - no response (connect error, timeout, broken body) => 500 `ApiError`
//! - status > 299 => the provider's own `ApiError` (decoded from the body)
//! - status <= 299 => `AccessToken` (decoded from the body)

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::error::ApiError;
use crate::services::oauth::{AccessToken, IdentityResolver};

const INVALID_CLIENT_RESPONSE: &str = "invalid rest client response when trying to get access token";
const INVALID_ERROR_INTERFACE: &str = "invalid rest error interface when trying to get access token";
const INVALID_USER_INTERFACE: &str = "invalid rest user interface";
const NO_SUCH_TOKEN: &str = "no access token found with given id";

/// Connection settings for the identity provider.
#[derive(Debug, Clone)]
pub struct OAuthClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl OAuthClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("base url cannot carry path segments: {0}")]
    UnsupportedBaseUrl(Url),
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct RestIdentityResolver {
    client: reqwest::Client,
    base_url: Url,
}

impl RestIdentityResolver {
    pub fn new(config: OAuthClientConfig) -> Result<Self, ClientBuildError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ClientBuildError::UnsupportedBaseUrl(config.base_url));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// `{base_url}/oauth/access_token/{token_id}`; the token id is encoded as
    /// one path segment so it cannot escape the lookup route.
    ///
    /// `None` for ids that cannot form a segment of their own: empty, `.` and
    /// `..` would be dropped or collapsed by path normalisation.
    pub fn endpoint(&self, token_id: &str) -> Option<Url> {
        if matches!(token_id, "" | "." | "..") {
            return None;
        }

        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base urls
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["oauth", "access_token", token_id]);
        Some(url)
    }
}

#[async_trait]
impl IdentityResolver for RestIdentityResolver {
    async fn resolve(&self, token_id: &str) -> Result<AccessToken, ApiError> {
        let Some(url) = self.endpoint(token_id) else {
            tracing::debug!("access token id is not a valid path segment");
            return Err(ApiError::not_found(NO_SUCH_TOKEN));
        };

        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::warn!(
                error = %err,
                timeout = err.is_timeout(),
                "identity provider request failed"
            );
            ApiError::internal_server_error(INVALID_CLIENT_RESPONSE).with_cause(err.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            tracing::warn!(
                error = %err,
                %status,
                timeout = err.is_timeout(),
                "identity provider response body could not be read"
            );
            ApiError::internal_server_error(INVALID_CLIENT_RESPONSE).with_cause(err.to_string())
        })?;

        if status.as_u16() > 299 {
            let provider_error = serde_json::from_slice::<ApiError>(&body).map_err(|err| {
                tracing::warn!(error = %err, %status, "undecodable identity provider error body");
                ApiError::internal_server_error(INVALID_ERROR_INTERFACE)
            })?;
            tracing::debug!(
                %status,
                provider_status = provider_error.http_status_code,
                "identity provider rejected access token lookup"
            );
            return Err(provider_error);
        }

        serde_json::from_slice::<AccessToken>(&body).map_err(|err| {
            tracing::warn!(error = %err, %status, "undecodable access token body");
            ApiError::internal_server_error(INVALID_USER_INTERFACE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: &str) -> RestIdentityResolver {
        RestIdentityResolver::new(OAuthClientConfig::new(base.parse().unwrap())).unwrap()
    }

    #[test]
    fn endpoint_appends_lookup_path() {
        let r = resolver("http://localhost:8080");
        assert_eq!(
            r.endpoint("abc").unwrap().as_str(),
            "http://localhost:8080/oauth/access_token/abc"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let r = resolver("http://idp.internal/v2/");
        assert_eq!(
            r.endpoint("abc").unwrap().as_str(),
            "http://idp.internal/v2/oauth/access_token/abc"
        );
    }

    #[test]
    fn endpoint_encodes_token_as_single_segment() {
        let r = resolver("http://localhost:8080");
        assert_eq!(
            r.endpoint("../users/1?x=y").unwrap().as_str(),
            "http://localhost:8080/oauth/access_token/..%2Fusers%2F1%3Fx=y"
        );
    }

    #[test]
    fn dot_segments_have_no_endpoint() {
        let r = resolver("http://localhost:8080");
        assert_eq!(r.endpoint("."), None);
        assert_eq!(r.endpoint(".."), None);
        assert_eq!(r.endpoint(""), None);
        assert!(r.endpoint("...").is_some());
        assert!(r.endpoint("a.b").is_some());
    }

    #[tokio::test]
    async fn dot_segment_token_is_not_found_without_a_request() {
        // Port 1 is never listening: any request sent would be a transport failure.
        let r = resolver("http://127.0.0.1:1");
        for token_id in [".", ".."] {
            let err = r.resolve(token_id).await.unwrap_err();
            assert!(err.is_not_found(), "{token_id}");
        }
    }

    #[test]
    fn rejects_cannot_be_a_base_url() {
        let config = OAuthClientConfig::new("mailto:idp@example.com".parse().unwrap());
        assert!(matches!(
            RestIdentityResolver::new(config),
            Err(ClientBuildError::UnsupportedBaseUrl(_))
        ));
    }

    #[test]
    fn default_timeout_is_short() {
        let config = OAuthClientConfig::new(OAuthClientConfig::DEFAULT_BASE_URL.parse().unwrap());
        assert_eq!(config.timeout, Duration::from_millis(200));
        let config = config.with_timeout(Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
