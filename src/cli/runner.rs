//! CLI runner - executes commands

use super::commands::{illust_type, restrict, Cli, Commands, OutputFormat};
use crate::api::AppApi;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::pagination::{Listing, Page};
use futures::StreamExt;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let settings = ClientSettings::load(self.cli.config.as_deref())?;
        let api = AppApi::from_settings(&settings)?;
        self.run_with(&api).await
    }

    /// Run the CLI command against an existing client
    pub async fn run_with(&self, api: &AppApi) -> Result<()> {
        let mut out = std::io::stdout();

        match &self.cli.command {
            Commands::Illusts { user_id, manga } => {
                let page = api.user_illusts(*user_id, illust_type(*manga)).await?;
                self.walk(page, &mut out).await
            }
            Commands::Novels { user_id } => {
                let page = api.user_novels(*user_id).await?;
                self.walk(page, &mut out).await
            }
            Commands::Bookmarks {
                user_id,
                private,
                tag,
            } => {
                let page = api
                    .user_bookmarks_illust(*user_id, restrict(*private), tag.as_deref())
                    .await?;
                self.walk(page, &mut out).await
            }
            Commands::Following { user_id, private } => {
                let page = api.user_following(*user_id, restrict(*private)).await?;
                self.walk(page, &mut out).await
            }
            Commands::BookmarkTags { user_id, private } => {
                let page = api
                    .user_bookmark_tags_illust(*user_id, restrict(*private))
                    .await?;
                self.walk(page, &mut out).await
            }
            Commands::Comments { illust_id } => {
                let page = api.illust_comments(*illust_id).await?;
                self.walk(page, &mut out).await
            }
            Commands::Markers => {
                let page = api.novel_markers().await?;
                self.walk(page, &mut out).await
            }
        }
    }

    /// Print up to `--pages` pages of a traversal
    async fn walk<T, W>(&self, first: Page<T>, out: &mut W) -> Result<()>
    where
        T: Listing + Serialize,
        W: Write,
    {
        let mut pages = Box::pin(first.into_pages().take(self.cli.pages));
        let mut fetched = 0usize;
        let mut items = 0usize;
        let mut more = false;

        while let Some(page) = pages.next().await {
            let page = page?;
            fetched += 1;
            items += page.len();
            more = page.has_next();
            for item in page.items() {
                write_item(out, item, self.cli.format)?;
            }
        }

        info!(pages = fetched, items, more, "Traversal finished");
        Ok(())
    }
}

/// Write one item in the requested format
fn write_item<T: Serialize, W: Write>(out: &mut W, item: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer(&mut *out, item)?,
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, item)?,
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookmarkTag;

    #[test]
    fn test_write_item_json_lines() {
        let mut out = Vec::new();
        let tag = BookmarkTag {
            name: "sky".to_string(),
            count: 2,
        };
        write_item(&mut out, &tag, OutputFormat::Json).unwrap();
        write_item(&mut out, &tag, OutputFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\"name\":\"sky\",\"count\":2}\n{\"name\":\"sky\",\"count\":2}\n"
        );
    }

    #[test]
    fn test_write_item_pretty() {
        let mut out = Vec::new();
        let tag = BookmarkTag {
            name: "sky".to_string(),
            count: 2,
        };
        write_item(&mut out, &tag, OutputFormat::Pretty).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"name\": \"sky\""));
        assert!(text.ends_with("}\n"));
    }
}
