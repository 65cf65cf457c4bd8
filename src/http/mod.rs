//! HTTP client module
//!
//! Provides the authenticated transport the pagination core fetches through.
//!
//! # Features
//!
//! - **Fetcher seam**: pages depend on the [`Fetcher`] trait, not on reqwest
//! - **Authentication**: Integration with the auth module
//! - **API errors**: App API error envelopes are decoded into [`crate::Error::Api`]
//!
//! Failed requests are returned as errors; nothing is retried here.

mod client;
mod fetcher;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_BASE_URL,
};
pub use fetcher::Fetcher;

pub(crate) use client::is_absolute_http_url;
