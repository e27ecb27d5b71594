use super::{BlogQueryService, RELATED_POSTS};
use crate::{
    application::{
        dto::{PostDetailDto, PostPage, PostSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostSlug, PostWithRelations, services::sample_without_replacement},
};

// Same message for "no such slug" and "not visible" so drafts stay undiscoverable.
const POST_NOT_FOUND: &str = "post not found";

pub struct PostBySlugQuery {
    pub slug: String,
}

impl BlogQueryService {
    #[tracing::instrument(skip_all, fields(slug = %query.slug))]
    pub async fn post_page(&self, query: PostBySlugQuery) -> ApplicationResult<PostPage> {
        let slug =
            PostSlug::new(query.slug).map_err(|_| ApplicationError::not_found(POST_NOT_FOUND))?;

        let visibility = self.visibility();
        let post = self
            .posts
            .find_by_slug(&slug)
            .await?
            .filter(|found| visibility.is_satisfied_by(&found.post))
            .ok_or_else(|| ApplicationError::not_found(POST_NOT_FOUND))?;

        let comments = self.comments.approved_for_post(post.id()).await?;

        let category_ids = post.category_ids();
        let related = if category_ids.is_empty() {
            Vec::new()
        } else {
            let candidates = self
                .posts
                .related_candidates(visibility, post.id(), &category_ids)
                .await?;
            pick_related(candidates)
        };

        Ok(PostPage {
            post: PostDetailDto::from_parts(post, comments),
            related_posts: related.into_iter().map(PostSummaryDto::from).collect(),
        })
    }
}

fn pick_related(candidates: Vec<PostWithRelations>) -> Vec<PostWithRelations> {
    let mut rng = rand::thread_rng();
    sample_without_replacement(candidates, RELATED_POSTS, &mut rng)
}
