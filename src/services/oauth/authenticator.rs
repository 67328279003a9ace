//! Request authentication: `access_token_id` query parameter => identity headers.
//!
//! Flow per request:
//! - strip any client-supplied `X-Caller-Id` / `X-Client-Id`
//! - no token id => anonymous
//! - token id unknown to the provider (404) => anonymous
//! - any other provider failure => returned to the caller as-is
//! - resolved => both identity headers set

use std::{fmt, sync::Arc};

use axum::http::Request;

use crate::error::ApiError;
use crate::services::oauth::{IdentityResolver, headers};

/// `true` when there is no request, or it carries `X-Public: true`.
pub fn is_public<B>(req: Option<&Request<B>>) -> bool {
    req.is_none_or(|r| headers::is_public(r.headers()))
}

/// Caller id from `X-Caller-Id`, or 0 when absent or unparsable.
pub fn get_caller_id<B>(req: Option<&Request<B>>) -> i64 {
    req.map_or(0, |r| headers::caller_id(r.headers()))
}

/// Client id from `X-Client-Id`, or 0 when absent or unparsable.
pub fn get_client_id<B>(req: Option<&Request<B>>) -> i64 {
    req.map_or(0, |r| headers::client_id(r.headers()))
}

/// Trimmed `access_token_id`, or `None` when missing or blank.
fn access_token_id<B>(req: &Request<B>) -> Option<String> {
    let query = req.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == headers::PARAM_ACCESS_TOKEN)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone)]
pub struct RequestAuthenticator {
    resolver: Arc<dyn IdentityResolver>,
}

impl fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestAuthenticator").finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { resolver }
    }

    /// Authenticate `req` in place.
    ///
    /// `Ok(())` covers both anonymous and authenticated outcomes; inspect the
    /// identity headers (or `get_caller_id`) to tell them apart. `Err` is only
    /// returned for failures other than "token not found".
    pub async fn authenticate_request<B>(&self, req: Option<&mut Request<B>>) -> Result<(), ApiError> {
        let Some(req) = req else {
            return Ok(());
        };

        headers::clear_identity(req.headers_mut());

        let Some(token_id) = access_token_id(req) else {
            tracing::debug!("no access token id, request stays anonymous");
            return Ok(());
        };

        let token = match self.resolver.resolve(&token_id).await {
            Ok(token) => token,
            Err(err) if err.is_not_found() => {
                tracing::debug!("access token id not found, request stays anonymous");
                return Ok(());
            }
            Err(err) => {
                tracing::warn!(
                    status = err.http_status_code,
                    error_code = %err.error_code,
                    message = %err.message,
                    "access token resolution failed"
                );
                return Err(err);
            }
        };

        headers::set_identity(req.headers_mut(), token.user_id, token.client_id);
        tracing::debug!(
            caller_id = token.user_id,
            client_id = token.client_id,
            "request authenticated"
        );

        Ok(())
    }
}
