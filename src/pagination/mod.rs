//! Pagination module
//!
//! Every list endpoint of the App API answers with one page of items and a
//! `next_url` cursor. [`Page`] holds such a page together with a weak handle
//! to the [`Fetcher`](crate::http::Fetcher) that produced it, so the next
//! page can be requested without re-supplying credentials.
//!
//! # Overview
//!
//! - [`Listing`] maps a resource kind to the JSON keys of its page payload
//! - [`Page::advance`] fetches the page behind the cursor, or fails with
//!   [`Error::EmptyCursor`](crate::Error::EmptyCursor) when there is none
//! - [`Page::into_pages`] and [`Page::into_item_stream`] walk a whole traversal

mod page;
mod types;

pub use page::Page;
pub use types::Listing;
