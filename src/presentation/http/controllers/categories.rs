// src/presentation/http/controllers/categories.rs
use crate::application::{dto::CategoryPage, queries::blog::CategoryPostsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::PageParams;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug"),
        ("page" = Option<u32>, Query, description = "1-based page number; invalid values mean page 1")
    ),
    responses(
        (status = 200, description = "Category with its published posts.", body = CategoryPage),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    params: PageParams,
) -> HttpResult<Json<CategoryPage>> {
    state
        .services
        .blog_queries
        .category_page(CategoryPostsQuery {
            slug,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}
