//! CLI module
//!
//! Command-line interface for walking App API traversals.
//!
//! # Commands
//!
//! - `illusts` - Works posted by a user
//! - `novels` - Novels posted by a user
//! - `bookmarks` - Illustrations a user bookmarked
//! - `following` - Users a user follows
//! - `bookmark-tags` - Tags on a user's bookmarks
//! - `comments` - Comments on an illustration
//! - `markers` - Novels with a saved reading position

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
