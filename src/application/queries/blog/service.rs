use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryWithCountDto, error::ApplicationResult, ports::time::Clock,
    },
    domain::{
        category::CategoryReadRepository, comment::CommentReadRepository,
        post::{PostReadRepository, PublicVisibility},
    },
};

pub const HOME_LATEST_POSTS: u32 = 6;
pub const POSTS_PER_PAGE: u32 = 12;
pub const RELATED_POSTS: usize = 3;
pub const BLOG_PATH: &str = "/blog";

/// Read-only assembly of the public blog pages.
pub struct BlogQueryService {
    pub(super) posts: Arc<dyn PostReadRepository>,
    pub(super) categories: Arc<dyn CategoryReadRepository>,
    pub(super) comments: Arc<dyn CommentReadRepository>,
    clock: Arc<dyn Clock>,
}

impl BlogQueryService {
    pub fn new(
        posts: Arc<dyn PostReadRepository>,
        categories: Arc<dyn CategoryReadRepository>,
        comments: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            categories,
            comments,
            clock,
        }
    }

    /// Visibility scope pinned to a single instant for the whole request.
    pub(super) fn visibility(&self) -> PublicVisibility {
        PublicVisibility::at(self.clock.now())
    }

    pub(super) async fn categories_with_counts(
        &self,
        visibility: PublicVisibility,
    ) -> ApplicationResult<Vec<CategoryWithCountDto>> {
        let categories = self.categories.list_with_post_counts(visibility).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
