use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

use super::Caller;

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller::from_headers(&parts.headers))
    }
}

/// Caller that must be authenticated. Rejects with 401 otherwise.
///
/// `X-Public` is client-controlled and only selects the public view of a
/// response; it never stands in for an identity.
pub struct AuthenticatedCaller(pub Caller);

impl<S> FromRequestParts<S> for AuthenticatedCaller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = Caller::from_headers(&parts.headers);
        if caller.is_authenticated() {
            Ok(AuthenticatedCaller(caller))
        } else {
            Err(ApiError::unauthorized("a valid access_token_id is required"))
        }
    }
}
