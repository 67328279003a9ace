//! Authenticate every request routed through this layer.
//!
//! - `access_token_id` query param => `X-Caller-Id` / `X-Client-Id` headers
//! - anonymous requests are forwarded untouched (minus forged identity headers)
//! - identity provider failures short-circuit with the `ApiError` response

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Apply authentication to `router`.
///
/// ```ignore
/// let v1 = middleware::oauth::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, oauth_middleware))
}

async fn oauth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = state.authenticator.authenticate_request(Some(&mut req)).await {
        tracing::warn!(
            method = %req.method(),
            path = req.uri().path(),
            status = err.http_status_code,
            "rejecting request, identity provider failure"
        );
        return Err(err);
    }

    Ok(next.run(req).await)
}
