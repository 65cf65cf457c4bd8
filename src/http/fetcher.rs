//! The transport contract pages are bound to

use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Performs an authenticated GET and decodes the JSON body.
///
/// `url` is either a path relative to the implementation's base URL or an
/// absolute URL that must be requested verbatim. Cursor URLs are always
/// absolute and are fetched with `query = None`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and decode the response body into `T`
    async fn get<T>(&self, url: &str, query: Option<&StringMap>) -> Result<T>
    where
        T: DeserializeOwned + Send;
}
