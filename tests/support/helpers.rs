// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{self, InMemoryBlog};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use blogtastic_core::application::{
    ports::time::Clock, queries::blog::BlogQueryService, services::ApplicationServices,
};
use blogtastic_core::domain::{
    category::CategoryReadRepository, comment::CommentReadRepository, post::PostReadRepository,
};
use blogtastic_core::presentation::http::{routes, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

/// インメモリデータと固定クロックでサービス群を組み立てる
pub fn build_services(blog: Arc<InMemoryBlog>) -> ApplicationServices {
    let posts: Arc<dyn PostReadRepository> = blog.clone();
    build_services_with_posts(blog, posts)
}

/// 記事リポジトリだけ差し替える（障害注入用）
pub fn build_services_with_posts(
    blog: Arc<InMemoryBlog>,
    posts: Arc<dyn PostReadRepository>,
) -> ApplicationServices {
    let categories: Arc<dyn CategoryReadRepository> = blog.clone();
    let comments: Arc<dyn CommentReadRepository> = blog;
    let clock: Arc<dyn Clock> = Arc::new(mocks::fixed_clock());
    ApplicationServices::new(posts, categories, comments, clock)
}

pub fn query_service(blog: InMemoryBlog) -> Arc<BlogQueryService> {
    build_services(blog.shared()).blog_queries
}

pub fn build_test_state(blog: InMemoryBlog) -> HttpState {
    HttpState {
        services: Arc::new(build_services(blog.shared())),
    }
}

pub fn make_test_router(blog: InMemoryBlog) -> axum::Router {
    routes::build_router_with_rate_limiter(build_test_state(blog), false)
}

pub fn make_router_from_services(services: ApplicationServices) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services),
    };
    routes::build_router_with_rate_limiter(state, false)
}

/// GET を送り、ステータスと JSON 本文を返す
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("expected json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// JSON 配列の各要素から `id` を取り出す
pub fn ids(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .expect("expected array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}
