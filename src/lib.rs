//! Query-string access token authentication for HTTP services.
//!
//! `RequestAuthenticator` exchanges the `access_token_id` query parameter for
//! the caller's identity (via an `IdentityResolver`) and writes it to the
//! `X-Caller-Id` / `X-Client-Id` request headers. The binary mounts it as
//! axum middleware in front of the `/api/v1` routes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use error::ApiError;
pub use services::oauth::{
    AccessToken, IdentityResolver, RequestAuthenticator, RestIdentityResolver, get_caller_id,
    get_client_id, is_public,
};
