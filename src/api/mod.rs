//! App API endpoints
//!
//! [`AppApi`] issues the first request of a traversal and hands back a
//! [`Page`](crate::pagination::Page) bound to its HTTP client. Detail
//! endpoints that are not paginated return their records directly.

mod client;
mod responses;

pub use client::AppApi;
pub use responses::{
    NovelText, Profile, ProfilePublicity, TrendTag, UgoiraFrame, UgoiraMetadata, UgoiraZipUrls,
    UserDetail,
};
