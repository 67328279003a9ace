pub mod access_token;
pub mod authenticator;
pub mod factory;
pub mod headers;
pub mod resolver;
pub mod rest_client;

pub use access_token::AccessToken;
pub use authenticator::{RequestAuthenticator, get_caller_id, get_client_id, is_public};
pub use factory::build_authenticator;
pub use resolver::IdentityResolver;
pub use rest_client::{ClientBuildError, OAuthClientConfig, RestIdentityResolver};
