use serde::{Deserialize, Serialize};

/// Identity resolved from an access token id by the identity provider.
///
/// Absent numeric fields decode as 0, matching how the provider's payloads
/// have always been read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub client_id: i64,
}
