//! Identity header contract shared by the authenticator and the extractors.
use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const X_PUBLIC: HeaderName = HeaderName::from_static("x-public");
pub const X_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");
pub const X_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");

pub const PARAM_ACCESS_TOKEN: &str = "access_token_id";

/// `X-Public: true` (exact, case-sensitive value) marks a public request.
pub fn is_public(headers: &HeaderMap) -> bool {
    headers
        .get(X_PUBLIC)
        .is_some_and(|v| v.as_bytes() == b"true")
}

pub fn caller_id(headers: &HeaderMap) -> i64 {
    parse_id(headers, &X_CALLER_ID)
}

pub fn client_id(headers: &HeaderMap) -> i64 {
    parse_id(headers, &X_CLIENT_ID)
}

// Missing, non-UTF-8 and non-decimal values all read as 0.
fn parse_id(headers: &HeaderMap, name: &HeaderName) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Drop every value of both identity headers.
pub fn clear_identity(headers: &mut HeaderMap) {
    headers.remove(X_CLIENT_ID);
    headers.remove(X_CALLER_ID);
}

/// Set both identity headers together.
pub fn set_identity(headers: &mut HeaderMap, caller_id: i64, client_id: i64) {
    headers.insert(X_CALLER_ID, HeaderValue::from(caller_id));
    headers.insert(X_CLIENT_ID, HeaderValue::from(client_id));
}
