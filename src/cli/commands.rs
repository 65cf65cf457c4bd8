//! CLI commands and argument parsing

use crate::types::{IllustId, IllustType, Restrict, UserId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pixiv App API client
#[derive(Parser, Debug)]
#[command(name = "pixiv-appapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML); credentials may also come from PIXIV_REFRESH_TOKEN
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of pages to fetch
    #[arg(short, long, global = true, default_value = "1")]
    pub pages: usize,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Works posted by a user
    Illusts {
        user_id: UserId,

        /// Fetch manga instead of illustrations
        #[arg(long)]
        manga: bool,
    },

    /// Novels posted by a user
    Novels { user_id: UserId },

    /// Illustrations a user bookmarked
    Bookmarks {
        user_id: UserId,

        /// List private bookmarks
        #[arg(long)]
        private: bool,

        /// Only bookmarks carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Users a user follows
    Following {
        user_id: UserId,

        /// List private follows
        #[arg(long)]
        private: bool,
    },

    /// Tags on a user's illustration bookmarks
    BookmarkTags {
        user_id: UserId,

        /// Tags of private bookmarks
        #[arg(long)]
        private: bool,
    },

    /// Comments on an illustration
    Comments { illust_id: IllustId },

    /// Novels with a saved reading position
    Markers,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// Map a `--private` flag to the query value
pub(crate) fn restrict(private: bool) -> Restrict {
    if private {
        Restrict::Private
    } else {
        Restrict::Public
    }
}

/// Map a `--manga` flag to the query value
pub(crate) fn illust_type(manga: bool) -> IllustType {
    if manga {
        IllustType::Manga
    } else {
        IllustType::Illust
    }
}
