// src/application/dto/pages.rs
//! View payloads handed to the rendering layer, one per page.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryWithCountDto, Paginated, PostDetailDto, PostSummaryDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub featured_post: Option<PostSummaryDto>,
    /// At most six posts, never including `featured_post`.
    pub latest_posts: Vec<PostSummaryDto>,
    pub categories: Vec<CategoryWithCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogListingPage {
    pub posts: Paginated<PostSummaryDto>,
    pub categories: Vec<CategoryWithCountDto>,
    /// The search term actually applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: CategoryWithCountDto,
    pub posts: Paginated<PostSummaryDto>,
    pub categories: Vec<CategoryWithCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub post: PostDetailDto,
    /// Up to three randomly chosen posts sharing a category.
    pub related_posts: Vec<PostSummaryDto>,
}
