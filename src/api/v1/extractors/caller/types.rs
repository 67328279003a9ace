/*
 * Responsibility
 * - Identity a handler sees once middleware::oauth has run
 *
 * Notes
 * - Built only from the identity headers; middleware strips forged values first
 * - 0 means "no caller" (the header contract cannot express a real id 0)
 */
use axum::http::HeaderMap;

use crate::services::oauth::headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caller {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

impl Caller {
    pub fn from_headers(h: &HeaderMap) -> Self {
        Self {
            caller_id: headers::caller_id(h),
            client_id: headers::client_id(h),
            public: headers::is_public(h),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.caller_id != 0
    }
}
