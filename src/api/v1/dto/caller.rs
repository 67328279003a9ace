use serde::{Deserialize, Serialize};

use crate::api::v1::extractors::Caller;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerResponse {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
    pub authenticated: bool,
}

impl From<Caller> for CallerResponse {
    fn from(c: Caller) -> Self {
        Self {
            caller_id: c.caller_id,
            client_id: c.client_id,
            public: c.public,
            authenticated: c.is_authenticated(),
        }
    }
}
