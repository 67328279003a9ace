/*
 * Responsibility
 * - ApiError shared by the authenticator, the identity provider client and the HTTP layer
 * - Wire shape of the identity provider's structured error body (serde)
 * - IntoResponse (HTTP status / JSON error body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Structured failure value.
///
/// Either built locally (transport or decode failures) or decoded verbatim
/// from the identity provider's error body. Missing fields decode to their
/// zero values, the same leniency the provider's other clients rely on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[error("{error_code} ({http_status_code}): {message}")]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "status", alias = "code", alias = "http_status_code", default)]
    pub http_status_code: u16,
    #[serde(rename = "error", alias = "error_code", default)]
    pub error_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub causes: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status_code: status.as_u16(),
            error_code: error_code.to_string(),
            causes: Vec::new(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Whether the provider classified the failure as "no such token".
    pub fn is_not_found(&self) -> bool {
        self.http_status_code == StatusCode::NOT_FOUND.as_u16()
    }

    /// HTTP status to answer with. Codes the provider sent that are not valid
    /// HTTP statuses (including the zero value) map to 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_error_body() {
        let body = r#"{"message":"no access token found","status":404,"error":"not_found","causes":null}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(err.message, "no access token found");
        assert_eq!(err.http_status_code, 404);
        assert_eq!(err.error_code, "not_found");
        assert!(err.causes.is_empty());
        assert!(err.is_not_found());
    }

    #[test]
    fn accepts_alternate_field_names() {
        let body = r#"{"message":"db down","code":503,"error_code":"unavailable","causes":["timeout"]}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(err.http_status_code, 503);
        assert_eq!(err.error_code, "unavailable");
        assert_eq!(err.causes, vec!["timeout".to_string()]);
        assert!(!err.is_not_found());
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let err: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(err, ApiError::default());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(serde_json::from_str::<ApiError>("\"boom\"").is_err());
        assert!(serde_json::from_str::<ApiError>("not json").is_err());
    }

    #[test]
    fn response_uses_carried_status() {
        let res = ApiError::new(StatusCode::FORBIDDEN, "forbidden", "nope").into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = ApiError::internal_server_error("boom")
            .with_cause("io")
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
