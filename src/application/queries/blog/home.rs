use super::{BlogQueryService, HOME_LATEST_POSTS};
use crate::{
    application::{
        dto::{HomePage, PostSummaryDto},
        error::ApplicationResult,
    },
    domain::post::PostWithRelations,
};

impl BlogQueryService {
    #[tracing::instrument(skip_all)]
    pub async fn home_page(&self) -> ApplicationResult<HomePage> {
        let visibility = self.visibility();

        let featured = self.posts.latest_featured(visibility).await?;
        let exclude = featured.as_ref().map(PostWithRelations::id);

        let latest = self
            .posts
            .latest(visibility, HOME_LATEST_POSTS, exclude)
            .await?;

        let categories = self.categories_with_counts(visibility).await?;

        tracing::debug!(
            featured = featured.is_some(),
            latest = latest.len(),
            categories = categories.len(),
            "assembled home page"
        );

        Ok(HomePage {
            featured_post: featured.map(PostSummaryDto::from),
            latest_posts: latest.into_iter().map(Into::into).collect(),
            categories,
        })
    }
}
