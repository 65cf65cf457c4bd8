//! Auth configuration types

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Token endpoint of the pixiv OAuth server
pub const DEFAULT_TOKEN_URL: &str = "https://oauth.secure.pixiv.net/auth/token";

/// Client ID of the official iOS app
pub const DEFAULT_CLIENT_ID: &str = "MOBrBDS8blbauoSck0ZfDbtuzpyT";

/// Client secret of the official iOS app
pub const DEFAULT_CLIENT_SECRET: &str = "lsACyCD94FhDUtGTXi3QzcFE2uU1hqtDaKeqrdwj";

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication (only useful against mock servers)
    #[default]
    None,

    /// A fixed access token that is never refreshed
    Bearer {
        /// The bearer token
        token: String,
    },

    /// OAuth2 Refresh Token flow
    RefreshToken {
        /// Token endpoint URL
        token_url: String,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// Refresh token
        refresh_token: String,
    },
}

impl AuthConfig {
    /// Refresh-token auth against the official endpoint with the iOS client
    pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
        Self::RefreshToken {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            client_secret: DEFAULT_CLIENT_SECRET.to_string(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Account the token was issued for
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    /// The token endpoint sends the ID as a string
    pub id: String,
    pub name: String,
    pub account: String,
    pub is_premium: bool,
    pub x_restrict: u8,
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token issued alongside the access token, replaces the configured one
    pub refresh_token: Option<String>,
    /// Account the token belongs to
    pub user: Option<AuthUser>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token,
            expires_at,
            refresh_token: None,
            user: None,
        }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self::new(token, Some(expires_at))
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}
