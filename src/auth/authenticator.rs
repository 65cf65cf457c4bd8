//! Authenticator implementation
//!
//! Handles applying authentication to requests and managing token refresh.

use super::types::{AuthConfig, AuthUser, CachedToken};
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Cached token for the refresh-token flow
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create an authenticator with a custom HTTP client
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),

            AuthConfig::RefreshToken { .. } => {
                let token = self.get_or_refresh_token().await?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    /// Get a valid token, refreshing if necessary
    async fn get_or_refresh_token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let rotated = cached.as_ref().and_then(|t| t.refresh_token.clone());
        let new_token = self.fetch_new_token(rotated.as_deref()).await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Exchange the refresh token for a new access token
    async fn fetch_new_token(&self, rotated_refresh_token: Option<&str>) -> Result<CachedToken> {
        let AuthConfig::RefreshToken {
            token_url,
            client_id,
            client_secret,
            refresh_token,
        } = &self.config
        else {
            return Err(Error::auth(
                "Token refresh not supported for this auth type",
            ));
        };

        let refresh_token = rotated_refresh_token.unwrap_or(refresh_token.as_str());
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("include_policy", "true"),
            ("get_secure_url", "true"),
        ];

        debug!("Refreshing access token at {}", token_url);
        let response = self
            .http_client
            .post(token_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Http)?;

        if !status.is_success() {
            let message = match serde_json::from_str::<AuthErrorBody>(&body) {
                Ok(err) if err.has_error => format!(
                    "HTTP {}: code {}: {}",
                    status.as_u16(),
                    err.errors.system.code,
                    err.errors.system.message
                ),
                _ => format!("HTTP {}: {}", status.as_u16(), body),
            };
            return Err(Error::token_refresh(message));
        }

        let envelope: TokenEnvelope = serde_json::from_str(&body)?;
        let token = envelope.into_response().into_cached_token();
        if let Some(user) = &token.user {
            info!(user_id = %user.id, account = %user.account, "Access token refreshed");
        }
        Ok(token)
    }

    /// Account of the current token, if a refresh has happened
    pub async fn user(&self) -> Option<AuthUser> {
        self.cached_token
            .read()
            .await
            .as_ref()
            .and_then(|t| t.user.clone())
    }

    /// Clear the cached token, forcing a refresh on the next request
    pub async fn clear_cache(&self) {
        let mut cached = self.cached_token.write().await;
        *cached = None;
    }

    /// Get the current auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

/// Token endpoint response
///
/// Older deployments wrap the payload in `response`, newer ones send it flat
/// (and keep the wrapped copy), so the wrapped form is tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenEnvelope {
    Wrapped { response: TokenResponse },
    Flat(TokenResponse),
}

impl TokenEnvelope {
    fn into_response(self) -> TokenResponse {
        match self {
            Self::Wrapped { response } | Self::Flat(response) => response,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    user: Option<AuthUser>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        let mut token = match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        };
        token.refresh_token = self.refresh_token;
        token.user = self.user;
        token
    }
}

/// Error envelope of the token endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthErrorBody {
    has_error: bool,
    errors: AuthErrors,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthErrors {
    system: AuthSystemError,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthSystemError {
    code: i64,
    message: String,
}
