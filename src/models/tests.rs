//! Tests for the data records

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_illust_decode() {
    let illust: Illust = serde_json::from_value(json!({
        "id": 59580629,
        "title": "Sunset",
        "type": "illust",
        "image_urls": {
            "square_medium": "https://i.pximg.net/sq.jpg",
            "medium": "https://i.pximg.net/m.jpg",
            "large": "https://i.pximg.net/l.jpg"
        },
        "caption": "",
        "restrict": 0,
        "user": {"id": 11, "name": "pixiv", "account": "pixiv", "is_followed": false},
        "tags": [{"name": "風景", "translated_name": "scenery"}],
        "tools": ["SAI"],
        "create_date": "2016-10-22T00:00:00+09:00",
        "page_count": 1,
        "width": 1200,
        "height": 800,
        "sanity_level": 2,
        "x_restrict": 0,
        "series": null,
        "meta_single_page": {"original_image_url": "https://i.pximg.net/o.jpg"},
        "meta_pages": [],
        "total_view": 1000,
        "total_bookmarks": 50,
        "is_bookmarked": false,
        "visible": true,
        "is_muted": false
    }))
    .unwrap();

    assert_eq!(illust.id, 59_580_629);
    assert_eq!(illust.kind, "illust");
    assert_eq!(illust.user.name, "pixiv");
    assert_eq!(illust.tags[0].translated_name.as_deref(), Some("scenery"));
    assert!(illust.create_date.is_some());
    assert!(illust.series.is_none());
    assert_eq!(illust.original_urls(), vec!["https://i.pximg.net/o.jpg"]);
    assert!(!illust.is_ugoira());
}

#[test]
fn test_illust_original_urls_multi_page() {
    let illust: Illust = serde_json::from_value(json!({
        "id": 1,
        "type": "manga",
        "meta_single_page": {},
        "meta_pages": [
            {"image_urls": {"original": "https://i.pximg.net/p0.png"}},
            {"image_urls": {"original": "https://i.pximg.net/p1.png"}}
        ]
    }))
    .unwrap();

    assert_eq!(
        illust.original_urls(),
        vec!["https://i.pximg.net/p0.png", "https://i.pximg.net/p1.png"]
    );
}

#[test]
fn test_novel_outside_series() {
    let novel: Novel = serde_json::from_value(json!({
        "id": 7,
        "title": "Short story",
        "series": {},
        "text_length": 4200
    }))
    .unwrap();

    assert_eq!(novel.id, 7);
    assert_eq!(novel.series.map(|s| s.id), Some(0));
    assert_eq!(novel.text_length, 4200);
}

#[test]
fn test_marked_novel_decode() {
    let marked: MarkedNovel = serde_json::from_value(json!({
        "novel": {"id": 3, "title": "Chapter 1"},
        "novel_marker": {"page": 12}
    }))
    .unwrap();

    assert_eq!(marked.novel.id, 3);
    assert_eq!(marked.novel_marker.page, 12);
}

#[test]
fn test_comment_from_deleted_user() {
    let comment: Comment = serde_json::from_value(json!({
        "id": 99,
        "comment": "nice",
        "date": "2021-01-02T03:04:05+09:00",
        "user": null,
        "has_replies": true
    }))
    .unwrap();

    assert_eq!(comment.id, 99);
    assert!(comment.user.is_none());
    assert!(comment.has_replies);
    assert!(comment.parent_comment.is_none());
}

#[test]
fn test_user_preview_and_bookmark_tag() {
    let preview: UserPreview = serde_json::from_value(json!({
        "user": {"id": 5, "name": "artist"},
        "illusts": [{"id": 1}, {"id": 2}, {"id": 3}],
        "novels": [],
        "is_muted": false
    }))
    .unwrap();
    assert_eq!(preview.user.id, 5);
    assert_eq!(preview.illusts.len(), 3);

    let tag: BookmarkTag = serde_json::from_value(json!({"name": "landscape", "count": 8})).unwrap();
    assert_eq!(tag, BookmarkTag { name: "landscape".to_string(), count: 8 });
}
