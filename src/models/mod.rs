//! Data records returned by the App API
//!
//! These are plain serde records with no behavior. Fields the server may
//! omit default to empty values so that partial payloads still decode.

mod comment;
mod illust;
mod novel;
mod user;

pub use comment::{Comment, Stamp};
pub use illust::{Illust, ImageUrls, MetaPage, MetaSinglePage, Series};
pub use novel::{MarkedNovel, Novel, NovelMarker};
pub use user::{BookmarkTag, ProfileImageUrls, User, UserPreview};

use serde::{Deserialize, Serialize};

/// A tag attached to a work
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub translated_name: Option<String>,
}

#[cfg(test)]
mod tests;
