//! Comment records

use super::User;
use crate::types::CommentId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A stamp posted in place of comment text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stamp {
    pub stamp_id: u64,
    pub stamp_url: String,
}

/// A comment on an illustration or novel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: CommentId,
    pub comment: String,
    pub date: Option<DateTime<FixedOffset>>,
    /// `None` when the author has left pixiv
    pub user: Option<User>,
    pub has_replies: bool,
    pub stamp: Option<Stamp>,
    /// Decodes with `id == 0` on top-level comments
    pub parent_comment: Option<Box<Comment>>,
}
