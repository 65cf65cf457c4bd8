//! Authentication module
//!
//! Supports: static Bearer token, OAuth2 refresh-token flow
//!
//! The `Authenticator` applies the access token to every App API request and
//! refreshes it against the OAuth endpoint once it expires.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{
    AuthConfig, AuthUser, CachedToken, DEFAULT_CLIENT_ID, DEFAULT_CLIENT_SECRET, DEFAULT_TOKEN_URL,
};
