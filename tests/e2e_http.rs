// tests/e2e_http.rs
use axum::http::StatusCode;

mod support;

use support::{InMemoryBlog, PostBuilder, category, get_json, ids, make_test_router};

fn blog() -> InMemoryBlog {
    let rust = category(1, "Rust");
    let css = category(2, "CSS");
    InMemoryBlog::new()
        .with_categories([rust.clone(), css.clone()])
        .with_posts([
            PostBuilder::new(1).slug("first").featured().categories(&[rust.clone()]).build(),
            PostBuilder::new(2).slug("second").categories(&[rust.clone(), css.clone()]).build(),
            PostBuilder::new(3).slug("third").categories(&[css]).build(),
            PostBuilder::new(4).slug("hidden").draft().categories(&[rust]).build(),
        ])
}

/// /health-check が status と ISO-8601 のタイムスタンプを返すことを確認する
#[tokio::test]
async fn health_check_returns_status_and_timestamp() {
    let app = make_test_router(InMemoryBlog::new());

    let (status, json) = get_json(&app, "/health-check").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["timestamp"], "2024-01-01T00:00:00.000000Z");
}

/// ホームの JSON がキャメルケースのトップレベルキーを持つことを確認する
#[tokio::test]
async fn home_payload_uses_camel_case_keys() {
    let app = make_test_router(blog());

    let (status, json) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["featuredPost"]["id"], 1);
    assert_eq!(ids(&json["latestPosts"]), vec![2, 3]);
    assert_eq!(json["categories"][0]["name"], "CSS");
    assert_eq!(json["categories"][0]["posts_count"], 2);
    assert_eq!(json["featuredPost"]["author"]["name"], "Alex Chen");
    assert!(json["featuredPost"].get("content").is_none());
}

/// /blog がページ情報とリンクを返すことを確認する
#[tokio::test]
async fn blog_listing_returns_paginator() {
    let app = make_test_router(blog());

    let (status, json) = get_json(&app, "/blog?page=1").await;

    assert_eq!(status, StatusCode::OK);
    let posts = &json["posts"];
    assert_eq!(ids(&posts["data"]), vec![1, 2, 3]);
    assert_eq!(posts["current_page"], 1);
    assert_eq!(posts["last_page"], 1);
    assert_eq!(posts["total"], 3);
    assert_eq!(posts["path"], "/blog");
    assert_eq!(posts["from"], 1);
    assert_eq!(posts["to"], 3);
    assert!(posts["next_page_url"].is_null());

    let labels: Vec<&str> = posts["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["&laquo; Previous", "1", "Next &raquo;"]);
    assert!(json.get("search").is_none());
}

/// 不正なページ番号は 1 ページ目として扱われることを確認する
#[tokio::test]
async fn invalid_page_parameter_falls_back_to_first_page() {
    let app = make_test_router(blog());

    for uri in ["/blog?page=abc", "/blog?page=-3", "/blog?page=0"] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["posts"]["current_page"], 1, "{uri}");
    }
}

/// 検索語がレスポンスと URL に反映されることを確認する
#[tokio::test]
async fn blog_search_is_echoed() {
    let app = make_test_router(blog());

    let (status, json) = get_json(&app, "/blog?search=Post%202").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json["posts"]["data"]), vec![2]);
    assert_eq!(json["search"], "Post 2");
    assert_eq!(json["posts"]["first_page_url"], "/blog?search=Post+2&page=1");
}

/// 記事詳細が本文と関連記事を返すことを確認する
#[tokio::test]
async fn post_detail_returns_post_and_related() {
    let app = make_test_router(blog());

    let (status, json) = get_json(&app, "/posts/second").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["post"]["slug"], "second");
    assert_eq!(json["post"]["reading_time_minutes"], 1);
    assert!(json["post"]["content"].is_string());
    let mut related = ids(&json["relatedPosts"]);
    related.sort_unstable();
    assert_eq!(related, vec![1, 3]);
}

/// カテゴリ詳細が公開記事とカテゴリ一覧を返すことを確認する
#[tokio::test]
async fn category_detail_returns_visible_posts() {
    let app = make_test_router(blog());

    let (status, json) = get_json(&app, "/categories/rust?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"]["slug"], "rust");
    assert_eq!(json["category"]["posts_count"], 2);
    assert_eq!(ids(&json["posts"]["data"]), vec![1, 2]);
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);
}
