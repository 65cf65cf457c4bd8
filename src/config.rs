//! Client settings
//!
//! Settings are read from an optional YAML file and then overridden by
//! environment variables, so credentials never need to live on disk:
//!
//! ```yaml
//! base_url: https://app-api.pixiv.net
//! timeout_secs: 30
//! accept_language: ja
//! auth:
//!   refresh_token: "..."
//! ```
//!
//! | variable              | overrides            |
//! |-----------------------|----------------------|
//! | `PIXIV_REFRESH_TOKEN` | `auth.refresh_token` |
//! | `PIXIV_ACCESS_TOKEN`  | `auth.access_token`  |
//! | `PIXIV_BASE_URL`      | `base_url`           |

use crate::auth::{AuthConfig, DEFAULT_CLIENT_ID, DEFAULT_CLIENT_SECRET, DEFAULT_TOKEN_URL};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the refresh token
pub const ENV_REFRESH_TOKEN: &str = "PIXIV_REFRESH_TOKEN";
/// Environment variable holding a fixed access token
pub const ENV_ACCESS_TOKEN: &str = "PIXIV_ACCESS_TOKEN";
/// Environment variable overriding the API host
pub const ENV_BASE_URL: &str = "PIXIV_BASE_URL";

/// Settings for building an [`AppApi`](crate::api::AppApi)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// App API host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for translated tag names
    #[serde(default)]
    pub accept_language: Option<String>,

    /// Override the iOS app user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Credentials
    #[serde(default)]
    pub auth: AuthSettings,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            accept_language: None,
            user_agent: None,
            auth: AuthSettings::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Credential settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    /// OAuth refresh token; preferred over `access_token`
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Fixed access token, never refreshed
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub token_url: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub client_secret: Option<String>,
}

impl ClientSettings {
    /// Parse settings from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        if settings.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(settings)
    }

    /// Read settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load from an optional file, then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(settings.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from `lookup` (the environment, in production)
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(ENV_REFRESH_TOKEN) {
            self.auth.refresh_token = Some(token);
        }
        if let Some(token) = non_empty(ENV_ACCESS_TOKEN) {
            self.auth.access_token = Some(token);
        }
        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.base_url = url;
        }
        self
    }

    /// HTTP client configuration described by these settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(language) = &self.accept_language {
            builder = builder.accept_language(language);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Auth configuration described by these settings
    pub fn auth_config(&self) -> Result<AuthConfig> {
        let auth = &self.auth;

        if let Some(refresh_token) = &auth.refresh_token {
            return Ok(AuthConfig::RefreshToken {
                token_url: auth
                    .token_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
                client_id: auth
                    .client_id
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
                client_secret: auth
                    .client_secret
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CLIENT_SECRET.to_string()),
                refresh_token: refresh_token.clone(),
            });
        }

        if let Some(token) = &auth.access_token {
            return Ok(AuthConfig::Bearer {
                token: token.clone(),
            });
        }

        Err(Error::missing_field(format!(
            "auth.refresh_token (or {ENV_REFRESH_TOKEN})"
        )))
    }
}
