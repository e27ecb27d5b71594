// src/presentation/http/controllers/posts.rs
use crate::application::{dto::PostPage, queries::blog::PostBySlugQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post with comments and related posts.", body = PostPage),
        (status = 404, description = "No published post with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostPage>> {
    state
        .services
        .blog_queries
        .post_page(PostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
