/*
 * Responsibility
 * - GET /caller: identity as seen after authentication (anonymous allowed)
 * - GET /me: same, but anonymous requests are rejected with 401 (X-Public does not exempt)
 */
use axum::Json;

use crate::api::v1::dto::caller::CallerResponse;
use crate::api::v1::extractors::{AuthenticatedCaller, Caller};

pub async fn caller(caller: Caller) -> Json<CallerResponse> {
    Json(CallerResponse::from(caller))
}

pub async fn me(AuthenticatedCaller(caller): AuthenticatedCaller) -> Json<CallerResponse> {
    Json(CallerResponse::from(caller))
}
