//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and the typed query values accepted by the App API endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Illustration (and manga, ugoira) identifier
pub type IllustId = u64;

/// Novel identifier
pub type NovelId = u64;

/// User identifier
pub type UserId = u64;

/// Comment identifier
pub type CommentId = u64;

// ============================================================================
// Query Values
// ============================================================================

/// Implements `as_str` and `Display` for a query enum from its wire names.
macro_rules! query_value {
    ($ty:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// Value sent on the wire
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Visibility of bookmarks and follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restrict {
    #[default]
    Public,
    Private,
}

query_value!(Restrict {
    Public => "public",
    Private => "private",
});

/// Content type filter for new and recommended works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Illust,
    Manga,
}

query_value!(ContentType {
    Illust => "illust",
    Manga => "manga",
});

/// Work type filter for a user's works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllustType {
    #[default]
    Illust,
    Manga,
}

query_value!(IllustType {
    Illust => "illust",
    Manga => "manga",
});

/// Ranking period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    #[default]
    Day,
    Week,
    Month,
    DayMale,
    DayFemale,
    WeekOriginal,
    WeekRookie,
    DayManga,
}

query_value!(RankingMode {
    Day => "day",
    Week => "week",
    Month => "month",
    DayMale => "day_male",
    DayFemale => "day_female",
    WeekOriginal => "week_original",
    WeekRookie => "week_rookie",
    DayManga => "day_manga",
});

/// Which fields a search word is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTarget {
    #[default]
    PartialMatchForTags,
    ExactMatchForTags,
    TitleAndCaption,
}

query_value!(SearchTarget {
    PartialMatchForTags => "partial_match_for_tags",
    ExactMatchForTags => "exact_match_for_tags",
    TitleAndCaption => "title_and_caption",
});

/// Search result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    #[default]
    DateDesc,
    DateAsc,
    PopularDesc,
}

query_value!(SearchSort {
    DateDesc => "date_desc",
    DateAsc => "date_asc",
    PopularDesc => "popular_desc",
});

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Restrict::Public, "public")]
    #[test_case(Restrict::Private, "private")]
    fn test_restrict_wire_value(value: Restrict, expected: &str) {
        assert_eq!(value.as_str(), expected);
        assert_eq!(value.to_string(), expected);
    }

    #[test_case(RankingMode::Day, "day")]
    #[test_case(RankingMode::DayMale, "day_male")]
    #[test_case(RankingMode::WeekRookie, "week_rookie")]
    fn test_ranking_mode_wire_value(value: RankingMode, expected: &str) {
        assert_eq!(value.as_str(), expected);
    }

    #[test]
    fn test_query_value_serde_matches_wire() {
        let json = serde_json::to_string(&SearchTarget::ExactMatchForTags).unwrap();
        assert_eq!(json, "\"exact_match_for_tags\"");

        let sort: SearchSort = serde_json::from_str("\"popular_desc\"").unwrap();
        assert_eq!(sort, SearchSort::PopularDesc);
        assert_eq!(sort.as_str(), "popular_desc");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Restrict::default(), Restrict::Public);
        assert_eq!(ContentType::default(), ContentType::Illust);
        assert_eq!(SearchSort::default(), SearchSort::DateDesc);
    }
}
