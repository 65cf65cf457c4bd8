//! Illustration records

use super::{Tag, User};
use crate::types::IllustId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Image URLs in the sizes the API serves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUrls {
    pub square_medium: String,
    pub medium: String,
    pub large: String,
    /// Only present on `meta_pages` entries
    pub original: Option<String>,
}

/// Original image of a single-page work
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaSinglePage {
    pub original_image_url: Option<String>,
}

/// One page of a multi-page work
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPage {
    pub image_urls: ImageUrls,
}

/// Series a work belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    pub id: u64,
    pub title: String,
}

/// An illustration, manga or ugoira
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Illust {
    pub id: IllustId,
    pub title: String,
    /// `illust`, `manga` or `ugoira`
    #[serde(rename = "type")]
    pub kind: String,
    pub image_urls: ImageUrls,
    pub caption: String,
    pub restrict: u8,
    pub user: User,
    pub tags: Vec<Tag>,
    pub tools: Vec<String>,
    pub create_date: Option<DateTime<FixedOffset>>,
    pub page_count: u32,
    pub width: u32,
    pub height: u32,
    pub sanity_level: u8,
    pub x_restrict: u8,
    pub series: Option<Series>,
    pub meta_single_page: MetaSinglePage,
    pub meta_pages: Vec<MetaPage>,
    pub total_view: u64,
    pub total_bookmarks: u64,
    pub total_comments: Option<u64>,
    pub is_bookmarked: bool,
    pub visible: bool,
    pub is_muted: bool,
}

impl Illust {
    /// Original-size URLs of every page, in page order
    pub fn original_urls(&self) -> Vec<&str> {
        if self.meta_pages.is_empty() {
            return self
                .meta_single_page
                .original_image_url
                .as_deref()
                .into_iter()
                .collect();
        }
        self.meta_pages
            .iter()
            .filter_map(|p| p.image_urls.original.as_deref())
            .collect()
    }

    /// Whether this work is an animated ugoira
    pub fn is_ugoira(&self) -> bool {
        self.kind == "ugoira"
    }
}
