//! Pagination types and traits
//!
//! Defines how a page payload is located inside a response body and how the
//! cursor is validated on the way in.

use crate::http::is_absolute_http_url;
use crate::models::{BookmarkTag, Comment, Illust, MarkedNovel, Novel, UserPreview};
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use tracing::warn;

/// A resource kind that list endpoints return in pages
pub trait Listing: DeserializeOwned + Send + Sync + 'static {
    /// JSON key of the item array
    const ITEMS_KEY: &'static str;

    /// JSON key of the ranking array sent alongside the items, if any
    const RANKING_KEY: Option<&'static str> = None;
}

impl Listing for Illust {
    const ITEMS_KEY: &'static str = "illusts";
    const RANKING_KEY: Option<&'static str> = Some("ranking_illusts");
}

impl Listing for Novel {
    const ITEMS_KEY: &'static str = "novels";
    const RANKING_KEY: Option<&'static str> = Some("ranking_novels");
}

impl Listing for MarkedNovel {
    const ITEMS_KEY: &'static str = "marked_novels";
}

impl Listing for Comment {
    const ITEMS_KEY: &'static str = "comments";
}

impl Listing for UserPreview {
    const ITEMS_KEY: &'static str = "user_previews";
}

impl Listing for BookmarkTag {
    const ITEMS_KEY: &'static str = "bookmark_tags";
}

/// A decoded page body, not yet bound to a fetcher
#[derive(Debug)]
pub(crate) struct RawPage<T> {
    pub items: Vec<T>,
    pub ranking: Vec<T>,
    pub next_url: Option<String>,
    pub search_span_limit: Option<u64>,
}

impl<'de, T: Listing> Deserialize<'de> for RawPage<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawPageVisitor(PhantomData))
    }
}

struct RawPageVisitor<T>(PhantomData<T>);

impl<'de, T: Listing> Visitor<'de> for RawPageVisitor<T> {
    type Value = RawPage<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a page object with a `{}` array", T::ITEMS_KEY)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = None;
        let mut ranking = Vec::new();
        let mut next_url = None;
        let mut search_span_limit = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == T::ITEMS_KEY {
                items = Some(map.next_value::<Option<Vec<T>>>()?.unwrap_or_default());
            } else if T::RANKING_KEY == Some(key.as_str()) {
                ranking = map.next_value::<Option<Vec<T>>>()?.unwrap_or_default();
            } else if key == "next_url" {
                next_url = map.next_value::<Option<String>>()?;
            } else if key == "search_span_limit" {
                search_span_limit = map.next_value::<Option<u64>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(RawPage {
            items: items.ok_or_else(|| de::Error::missing_field(T::ITEMS_KEY))?,
            ranking,
            next_url: next_url.and_then(normalize_cursor),
            search_span_limit,
        })
    }
}

/// Keep a cursor only if it is an absolute http(s) URL.
///
/// The string itself is returned untouched so it is replayed verbatim.
pub(crate) fn normalize_cursor(raw: String) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    if is_absolute_http_url(&raw) {
        Some(raw)
    } else {
        warn!(next_url = %raw, "Discarding next_url that is not an absolute http(s) URL");
        None
    }
}
