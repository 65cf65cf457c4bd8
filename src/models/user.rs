//! User records

use super::{Illust, Novel};
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Avatar URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileImageUrls {
    pub medium: String,
}

/// A pixiv user as embedded in works, comments and previews
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub account: String,
    pub profile_image_urls: ProfileImageUrls,
    pub comment: Option<String>,
    pub is_followed: Option<bool>,
}

/// A user together with their latest works
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreview {
    pub user: User,
    pub illusts: Vec<Illust>,
    pub novels: Vec<Novel>,
    pub is_muted: bool,
}

/// A bookmark tag and how many bookmarks carry it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkTag {
    pub name: String,
    pub count: u64,
}
