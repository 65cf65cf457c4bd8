//! Typed App API endpoints

use super::responses::{
    CommentEnvelope, IllustEnvelope, NovelEnvelope, NovelText, TagsEnvelope, TrendTag,
    TrendingTagsEnvelope, UgoiraEnvelope, UgoiraMetadata, UserDetail,
};
use crate::auth::AuthConfig;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::models::{BookmarkTag, Comment, Illust, MarkedNovel, Novel, Tag, UserPreview};
use crate::pagination::{Listing, Page};
use crate::types::{
    CommentId, ContentType, IllustId, IllustType, NovelId, RankingMode, Restrict, SearchSort,
    SearchTarget, UserId,
};
use chrono::NaiveDate;
use std::sync::Arc;

/// Entry point for App API calls.
///
/// Cloning is cheap; all clones share one HTTP client, and every page they
/// return holds a weak handle to it.
#[derive(Debug, Clone)]
pub struct AppApi {
    http: Arc<HttpClient>,
}

impl AppApi {
    /// Wrap an already configured HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Build a client from explicit HTTP and auth configuration
    pub fn with_auth(config: HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::with_auth(config, auth)?))
    }

    /// Build a client from loaded settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        Self::with_auth(settings.http_config(), settings.auth_config()?)
    }

    /// The shared HTTP client pages are bound to
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// First page of a list endpoint
    pub async fn list<T: Listing>(&self, path: &str, request: RequestConfig) -> Result<Page<T>> {
        Page::fetch(&self.http, path, Some(&request.query)).await
    }

    // ========================================================================
    // Illustrations
    // ========================================================================

    /// Works posted by a user
    pub async fn user_illusts(&self, user_id: UserId, kind: IllustType) -> Result<Page<Illust>> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("type", kind)
            .query("filter", "for_ios");
        self.list("/v1/user/illusts", request).await
    }

    /// Illustrations a user bookmarked, optionally only those under `tag`
    pub async fn user_bookmarks_illust(
        &self,
        user_id: UserId,
        restrict: Restrict,
        tag: Option<&str>,
    ) -> Result<Page<Illust>> {
        let mut request = RequestConfig::new()
            .query("user_id", user_id)
            .query("restrict", restrict)
            .query("filter", "for_ios");
        if let Some(tag) = tag {
            request = request.query("tag", tag);
        }
        self.list("/v1/user/bookmarks/illust", request).await
    }

    /// New works from followed users
    pub async fn illust_follow(&self, restrict: Restrict) -> Result<Page<Illust>> {
        let request = RequestConfig::new().query("restrict", restrict);
        self.list("/v2/illust/follow", request).await
    }

    /// Newest works on pixiv
    pub async fn illust_new(&self, content_type: ContentType) -> Result<Page<Illust>> {
        let request = RequestConfig::new()
            .query("content_type", content_type)
            .query("filter", "for_ios");
        self.list("/v1/illust/new", request).await
    }

    /// New works from My pixiv users
    pub async fn illust_mypixiv(&self) -> Result<Page<Illust>> {
        self.list("/v2/illust/mypixiv", RequestConfig::new()).await
    }

    /// Recommended works; the first page also carries ranking works
    pub async fn illust_recommended(&self, content_type: ContentType) -> Result<Page<Illust>> {
        let request = RequestConfig::new()
            .query("content_type", content_type)
            .query("include_ranking_illusts", true)
            .query("filter", "for_ios");
        self.list("/v1/illust/recommended", request).await
    }

    /// Ranking for `mode`, today's unless `date` is given
    pub async fn illust_ranking(
        &self,
        mode: RankingMode,
        date: Option<NaiveDate>,
    ) -> Result<Page<Illust>> {
        let mut request = RequestConfig::new()
            .query("mode", mode)
            .query("filter", "for_ios");
        if let Some(date) = date {
            request = request.query("date", date.format("%Y-%m-%d"));
        }
        self.list("/v1/illust/ranking", request).await
    }

    /// Search illustrations by keyword
    pub async fn search_illust(
        &self,
        word: &str,
        target: SearchTarget,
        sort: SearchSort,
    ) -> Result<Page<Illust>> {
        let request = RequestConfig::new()
            .query("word", word)
            .query("search_target", target)
            .query("sort", sort)
            .query("filter", "for_ios");
        self.list("/v1/search/illust", request).await
    }

    pub async fn illust_detail(&self, illust_id: IllustId) -> Result<Illust> {
        let request = RequestConfig::new().query("illust_id", illust_id);
        let body: IllustEnvelope = self
            .http
            .get_json_with_config("/v1/illust/detail", request)
            .await?;
        Ok(body.illust)
    }

    /// Frame archive of an ugoira
    pub async fn ugoira_metadata(&self, illust_id: IllustId) -> Result<UgoiraMetadata> {
        let request = RequestConfig::new().query("illust_id", illust_id);
        let body: UgoiraEnvelope = self
            .http
            .get_json_with_config("/v1/ugoira/metadata", request)
            .await?;
        Ok(body.ugoira_metadata)
    }

    // ========================================================================
    // Novels
    // ========================================================================

    pub async fn user_novels(&self, user_id: UserId) -> Result<Page<Novel>> {
        let request = RequestConfig::new().query("user_id", user_id);
        self.list("/v1/user/novels", request).await
    }

    pub async fn user_bookmarks_novel(
        &self,
        user_id: UserId,
        restrict: Restrict,
    ) -> Result<Page<Novel>> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("restrict", restrict);
        self.list("/v1/user/bookmarks/novel", request).await
    }

    /// Recommended novels; the first page also carries ranking novels
    pub async fn novel_recommended(&self) -> Result<Page<Novel>> {
        let request = RequestConfig::new().query("include_ranking_novels", true);
        self.list("/v1/novel/recommended", request).await
    }

    /// Novels the current user saved a reading position in
    pub async fn novel_markers(&self) -> Result<Page<MarkedNovel>> {
        self.list("/v2/novel/markers", RequestConfig::new()).await
    }

    pub async fn novel_detail(&self, novel_id: NovelId) -> Result<Novel> {
        let request = RequestConfig::new().query("novel_id", novel_id);
        let body: NovelEnvelope = self
            .http
            .get_json_with_config("/v2/novel/detail", request)
            .await?;
        Ok(body.novel)
    }

    pub async fn novel_text(&self, novel_id: NovelId) -> Result<NovelText> {
        let request = RequestConfig::new().query("novel_id", novel_id);
        self.http
            .get_json_with_config("/v1/novel/text", request)
            .await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub async fn illust_comments(&self, illust_id: IllustId) -> Result<Page<Comment>> {
        let request = RequestConfig::new()
            .query("illust_id", illust_id)
            .query("include_total_comments", true);
        self.list("/v2/illust/comments", request).await
    }

    pub async fn novel_comments(&self, novel_id: NovelId) -> Result<Page<Comment>> {
        let request = RequestConfig::new()
            .query("novel_id", novel_id)
            .query("include_total_comments", true);
        self.list("/v2/novel/comments", request).await
    }

    /// Replies to a comment
    pub async fn comment_replies(&self, comment_id: CommentId) -> Result<Page<Comment>> {
        let request = RequestConfig::new().query("comment_id", comment_id);
        self.list("/v1/illust/comment/replies", request).await
    }

    /// Post a comment, or a reply when `parent_comment_id` is set
    pub async fn illust_comment_add(
        &self,
        illust_id: IllustId,
        comment: &str,
        parent_comment_id: Option<CommentId>,
    ) -> Result<Comment> {
        let mut request = RequestConfig::new()
            .form("illust_id", illust_id)
            .form("comment", comment);
        if let Some(parent) = parent_comment_id {
            request = request.form("parent_comment_id", parent);
        }
        let body: CommentEnvelope = self
            .http
            .post_form_json("/v1/illust/comment/add", request)
            .await?;
        Ok(body.comment)
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn user_detail(&self, user_id: UserId) -> Result<UserDetail> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("filter", "for_ios");
        self.http
            .get_json_with_config("/v1/user/detail", request)
            .await
    }

    /// Users followed by `user_id`
    pub async fn user_following(
        &self,
        user_id: UserId,
        restrict: Restrict,
    ) -> Result<Page<UserPreview>> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("restrict", restrict);
        self.list("/v1/user/following", request).await
    }

    /// Users following `user_id`
    pub async fn user_follower(&self, user_id: UserId) -> Result<Page<UserPreview>> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("filter", "for_ios");
        self.list("/v1/user/follower", request).await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Tags used on a user's illustration bookmarks, with counts
    pub async fn user_bookmark_tags_illust(
        &self,
        user_id: UserId,
        restrict: Restrict,
    ) -> Result<Page<BookmarkTag>> {
        let request = RequestConfig::new()
            .query("user_id", user_id)
            .query("restrict", restrict);
        self.list("/v1/user/bookmark-tags/illust", request).await
    }

    pub async fn trending_tags_illust(&self) -> Result<Vec<TrendTag>> {
        let request = RequestConfig::new().query("filter", "for_ios");
        let body: TrendingTagsEnvelope = self
            .http
            .get_json_with_config("/v1/trending-tags/illust", request)
            .await?;
        Ok(body.trend_tags)
    }

    /// Tag suggestions for a partial search word
    pub async fn search_autocomplete(&self, word: &str) -> Result<Vec<Tag>> {
        let request = RequestConfig::new().query("word", word);
        let body: TagsEnvelope = self
            .http
            .get_json_with_config("/v2/search/autocomplete", request)
            .await?;
        Ok(body.tags)
    }
}
