//! Identity lookup interface used by `RequestAuthenticator`.
use async_trait::async_trait;

use crate::error::ApiError;
use crate::services::oauth::AccessToken;

/// Resolves an access token id into the identity it was issued for.
///
/// Error contract:
/// - `http_status_code == 404` => the token id is unknown (caller stays anonymous)
/// - anything else => fatal for the current request
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token_id: &str) -> Result<AccessToken, ApiError>;
}
