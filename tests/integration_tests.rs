//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: settings → token refresh → paged listings

use clap::Parser;
use futures::StreamExt;
use pixiv_appapi::cli::{Cli, Runner};
use pixiv_appapi::config::{ClientSettings, ENV_BASE_URL, ENV_REFRESH_TOKEN};
use pixiv_appapi::http::{HttpClient, HttpClientConfig};
use pixiv_appapi::types::{IllustType, Restrict};
use pixiv_appapi::{AppApi, Error};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> AppApi {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    AppApi::new(HttpClient::with_config(config).unwrap())
}

/// Mount `/v1/user/illusts` answering [1, 2] → [3] → end
async fn mount_two_page_illusts(server: &MockServer) {
    let next_url = format!(
        "{}/v1/user/illusts?user_id=11&type=illust&filter=for_ios&offset=30",
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/v1/user/illusts"))
        .and(query_param("offset", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "illusts": [{"id": 3, "title": "C"}],
            "next_url": null
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/user/illusts"))
        .and(query_param("user_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "illusts": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}],
            "next_url": next_url
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Traversal Tests
// ============================================================================

#[tokio::test]
async fn test_advance_until_empty_cursor() {
    let mock_server = MockServer::start().await;
    mount_two_page_illusts(&mock_server).await;

    let api = api_for(&mock_server);
    let first = api.user_illusts(11, IllustType::Illust).await.unwrap();
    let titles: Vec<_> = first.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    let second = first.advance().await.unwrap();
    assert_eq!(second.items()[0].title, "C");
    assert_eq!(second.next_url(), None);

    let err = second.advance().await.unwrap_err();
    assert!(err.is_end_of_pages());

    // Advancing is repeatable; the first page still points at the same cursor
    let again = first.advance().await.unwrap();
    assert_eq!(again.items()[0].id, 3);
}

#[tokio::test]
async fn test_item_stream_and_collect() {
    let mock_server = MockServer::start().await;
    mount_two_page_illusts(&mock_server).await;

    let api = api_for(&mock_server);
    let first = api.user_illusts(11, IllustType::Illust).await.unwrap();

    let ids: Vec<u64> = first
        .clone()
        .into_item_stream()
        .map(|item| item.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, vec![1, 2, 3]);

    let one_page = first.clone().collect_items(1).await.unwrap();
    assert_eq!(one_page.len(), 2);

    let all = first.collect_items(10).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_failing_page_ends_stream_with_error() {
    let mock_server = MockServer::start().await;
    let next_url = format!(
        "{}/v1/user/bookmark-tags/illust?user_id=5&restrict=public&offset=30",
        mock_server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/v1/user/bookmark-tags/illust"))
        .and(query_param("offset", "30"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/user/bookmark-tags/illust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookmark_tags": [{"name": "sky", "count": 4}, {"name": "sea", "count": 1}],
            "next_url": next_url
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let first = api
        .user_bookmark_tags_illust(5, Restrict::Public)
        .await
        .unwrap();

    let pages: Vec<_> = first.into_pages().collect().await;
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].as_ref().unwrap().len(), 2);
    match &pages[1] {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(*status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relative_next_url_ends_traversal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/illust/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [{"id": 1, "comment": "first"}],
            "next_url": "/v2/illust/comments?illust_id=1&offset=30"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let page = api.illust_comments(1).await.unwrap();
    assert!(!page.has_next());
    assert!(matches!(page.advance().await, Err(Error::EmptyCursor)));
}

#[tokio::test]
async fn test_uppercase_scheme_cursor_requested_as_received() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri().trim_start_matches("http://").to_string();
    let next_url = format!("HTTP://{host}/v1/next");

    Mock::given(method("GET"))
        .and(path("/v1/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [{"id": 2, "comment": "second"}],
            "next_url": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/illust/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "comments": [{"id": 1, "comment": "first"}],
            "next_url": next_url
        })))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let page = api.illust_comments(1).await.unwrap();
    assert_eq!(page.next_url(), Some(next_url.as_str()));

    let second = page.advance().await.unwrap();
    assert_eq!(second.items()[0].comment, "second");
}

#[tokio::test]
async fn test_dropped_client_closes_pages() {
    let mock_server = MockServer::start().await;
    mount_two_page_illusts(&mock_server).await;

    let api = api_for(&mock_server);
    let first = api.user_illusts(11, IllustType::Illust).await.unwrap();
    drop(api);

    let err = first.advance().await.unwrap_err();
    assert!(matches!(err, Error::FetcherClosed));
    assert!(!err.is_end_of_pages());
}

// ============================================================================
// Settings and Auth Tests
// ============================================================================

#[tokio::test]
async fn test_settings_with_refresh_token_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=rt-from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-access",
            "refresh_token": "rt-rotated",
            "expires_in": 3600,
            "user": {"id": "11", "name": "pixiv", "account": "pixiv"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/user/following"))
        .and(header("Authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_previews": [{"user": {"id": 2, "name": "two"}}],
            "next_url": null
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "timeout_secs: 5\nauth:\n  token_url: {}/auth/token",
        mock_server.uri()
    )
    .unwrap();

    let uri = mock_server.uri();
    let settings = ClientSettings::from_file(file.path())
        .unwrap()
        .with_overrides(|key| match key {
            k if k == ENV_REFRESH_TOKEN => Some("rt-from-env".to_string()),
            k if k == ENV_BASE_URL => Some(uri.clone()),
            _ => None,
        });

    let api = AppApi::from_settings(&settings).unwrap();
    let page = api.user_following(1, Restrict::Public).await.unwrap();
    assert_eq!(page.items()[0].user.name, "two");

    // Cached token is reused for the second call
    api.user_following(1, Restrict::Public).await.unwrap();

    let user = api.http().authenticator().unwrap().user().await.unwrap();
    assert_eq!(user.account, "pixiv");
}

#[tokio::test]
async fn test_token_refresh_failure_surfaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "has_error": true,
            "errors": {"system": {"message": "Invalid refresh token", "code": 1508}}
        })))
        .mount(&mock_server)
        .await;

    let mut settings = ClientSettings {
        base_url: mock_server.uri(),
        ..ClientSettings::default()
    };
    settings.auth.refresh_token = Some("stale".to_string());
    settings.auth.token_url = Some(format!("{}/auth/token", mock_server.uri()));

    let api = AppApi::from_settings(&settings).unwrap();
    let err = api.novel_markers().await.unwrap_err();
    match err {
        Error::TokenRefresh { message } => assert!(message.contains("1508")),
        other => panic!("Expected TokenRefresh, got {other:?}"),
    }
}

// ============================================================================
// CLI Tests
// ============================================================================

#[tokio::test]
async fn test_runner_walks_requested_pages() {
    let mock_server = MockServer::start().await;
    mount_two_page_illusts(&mock_server).await;

    let api = api_for(&mock_server);
    let cli = Cli::parse_from(["pixiv-appapi", "--pages", "5", "illusts", "11"]);
    Runner::new(cli).run_with(&api).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_runner_stops_at_page_limit() {
    let mock_server = MockServer::start().await;
    mount_two_page_illusts(&mock_server).await;

    let api = api_for(&mock_server);
    let cli = Cli::parse_from(["pixiv-appapi", "illusts", "11"]);
    Runner::new(cli).run_with(&api).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
