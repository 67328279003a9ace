/// Factory: build `RequestAuthenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::oauth::{
    ClientBuildError, OAuthClientConfig, RequestAuthenticator, RestIdentityResolver,
};

pub fn build_authenticator(config: &Config) -> Result<Arc<RequestAuthenticator>, ClientBuildError> {
    let client_config =
        OAuthClientConfig::new(config.oauth_base_url.clone()).with_timeout(config.oauth_timeout);
    let resolver = RestIdentityResolver::new(client_config)?;

    Ok(Arc::new(RequestAuthenticator::new(Arc::new(resolver))))
}
