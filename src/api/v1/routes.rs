/*
 * Responsibility
 * - v1 URL layout
 * - Authentication is layered on by the caller (see middleware::oauth::apply)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::caller::{caller, me};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/caller", get(caller))
        .route("/me", get(me))
}
