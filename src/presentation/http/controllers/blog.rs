// src/presentation/http/controllers/blog.rs
use crate::application::{
    dto::{BlogListingPage, HomePage},
    queries::blog::BlogListingQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PageParams;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Featured post, latest posts and categories.", body = HomePage),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePage>> {
    state
        .services
        .blog_queries
        .home_page()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/blog",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number; invalid values mean page 1"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title or excerpt")
    ),
    responses(
        (status = 200, description = "One page of published posts.", body = BlogListingPage),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn listing(
    Extension(state): Extension<HttpState>,
    params: PageParams,
) -> HttpResult<Json<BlogListingPage>> {
    state
        .services
        .blog_queries
        .blog_listing(BlogListingQuery {
            page: params.page,
            search: params.search,
        })
        .await
        .into_http()
        .map(Json)
}
