//! # pixiv App API client
//!
//! Typed access to the pixiv App API with cursor pagination.
//!
//! Every list endpoint answers with one page of items plus an absolute
//! `next_url` cursor. A [`Page`] keeps that cursor together with a weak
//! handle to the client that fetched it, so the next page is one call away:
//!
//! ```rust,ignore
//! use pixiv_appapi::{AppApi, Result, auth::AuthConfig, http::HttpClientConfig};
//! use pixiv_appapi::types::IllustType;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = AppApi::with_auth(
//!         HttpClientConfig::default(),
//!         AuthConfig::refresh_token("..."),
//!     )?;
//!
//!     let mut page = api.user_illusts(11, IllustType::Illust).await?;
//!     loop {
//!         for illust in page.items() {
//!             println!("{} {}", illust.id, illust.title);
//!         }
//!         if !page.has_next() {
//!             break;
//!         }
//!         page = page.advance().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        AppApi                             │
//! │  user_illusts  user_bookmarks_illust  illust_comments ... │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴────────────┬─────────────────┐
//! │     Auth     │          HTTP            │    Paginate     │
//! ├──────────────┼──────────────────────────┼─────────────────┤
//! │ Bearer       │ iOS app headers          │ Page<T>         │
//! │ Refresh token│ API error envelopes      │ advance()       │
//! │ Token cache  │ Fetcher trait            │ into_pages()    │
//! └──────────────┴──────────────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document model fields once the response shapes settle

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client and the fetcher seam
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Resource records
pub mod models;

/// Typed App API endpoints
pub mod api;

/// Client settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::AppApi;
pub use error::{Error, Result};
pub use http::{Fetcher, HttpClient};
pub use pagination::{Listing, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
