/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Cheap to Clone (Arc inside)
 */
use std::sync::Arc;

use crate::services::oauth::RequestAuthenticator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<RequestAuthenticator>,
}

impl AppState {
    pub fn new(authenticator: Arc<RequestAuthenticator>) -> Self {
        Self { authenticator }
    }
}
