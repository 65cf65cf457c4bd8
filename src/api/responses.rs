//! Bodies of the endpoints that are not paginated

use crate::models::{Comment, Illust, Novel, NovelMarker, Tag, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub(crate) struct IllustEnvelope {
    pub illust: Illust,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NovelEnvelope {
    pub novel: Novel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentEnvelope {
    pub comment: Comment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UgoiraEnvelope {
    pub ugoira_metadata: UgoiraMetadata,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingTagsEnvelope {
    #[serde(default)]
    pub trend_tags: Vec<TrendTag>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagsEnvelope {
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Text of a novel with its neighbours in the series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NovelText {
    pub novel_marker: NovelMarker,
    pub novel_text: String,
    pub series_prev: Option<Novel>,
    pub series_next: Option<Novel>,
}

/// Public profile fields of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub webpage: Option<String>,
    pub gender: String,
    pub birth: String,
    pub region: String,
    pub job: String,
    pub total_follow_users: u64,
    pub total_mypixiv_users: u64,
    pub total_illusts: u64,
    pub total_manga: u64,
    pub total_novels: u64,
    pub total_illust_bookmarks_public: u64,
    pub background_image_url: Option<String>,
    pub twitter_account: String,
    pub is_premium: bool,
}

/// Visibility of profile fields, each `public` or `private`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePublicity {
    pub gender: String,
    pub region: String,
    pub birth_day: String,
    pub birth_year: String,
    pub job: String,
    pub pawoo: bool,
}

/// Response of `/v1/user/detail`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetail {
    pub user: User,
    pub profile: Profile,
    pub profile_publicity: ProfilePublicity,
    /// Free-form "workspace" entries (tool, monitor, desk, ...)
    pub workspace: HashMap<String, Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UgoiraZipUrls {
    pub medium: String,
}

/// One frame of an ugoira archive; `delay` is in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UgoiraFrame {
    pub file: String,
    pub delay: u32,
}

/// Frame archive and timings of an ugoira
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UgoiraMetadata {
    pub zip_urls: UgoiraZipUrls,
    pub frames: Vec<UgoiraFrame>,
}

impl UgoiraMetadata {
    /// Total play time of one loop in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.delay)).sum()
    }
}

/// A trending tag with its representative work
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendTag {
    #[serde(rename = "tag")]
    pub name: String,
    pub translated_name: Option<String>,
    pub illust: Illust,
}
