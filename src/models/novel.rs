//! Novel records

use super::{ImageUrls, Series, Tag, User};
use crate::types::NovelId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A novel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Novel {
    pub id: NovelId,
    pub title: String,
    pub caption: String,
    pub restrict: u8,
    pub x_restrict: u8,
    pub is_original: bool,
    pub image_urls: ImageUrls,
    pub create_date: Option<DateTime<FixedOffset>>,
    pub tags: Vec<Tag>,
    pub page_count: u32,
    pub text_length: u64,
    pub user: User,
    /// Decodes with `id == 0` for novels outside a series
    pub series: Option<Series>,
    pub is_bookmarked: bool,
    pub total_bookmarks: u64,
    pub total_view: u64,
    pub total_comments: u64,
    pub visible: bool,
    pub is_muted: bool,
    pub is_mypixiv_only: bool,
    pub is_x_restricted: bool,
}

/// Reading position saved on a novel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NovelMarker {
    pub page: u32,
}

/// A novel paired with the reader's marker, from `/v2/novel/markers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkedNovel {
    pub novel: Novel,
    pub novel_marker: NovelMarker,
}
