use super::{BlogQueryService, POSTS_PER_PAGE};
use crate::{
    application::{
        dto::{CategoryPage, CategoryWithCountDto, PageUrl, Paginated},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategorySlug, CategoryWithCount},
        pagination::PageRequest,
        post::PostFilter,
    },
};

const CATEGORY_NOT_FOUND: &str = "category not found";

pub struct CategoryPostsQuery {
    pub slug: String,
    pub page: u32,
}

impl BlogQueryService {
    #[tracing::instrument(skip_all, fields(slug = %query.slug, page = query.page))]
    pub async fn category_page(
        &self,
        query: CategoryPostsQuery,
    ) -> ApplicationResult<CategoryPage> {
        // A slug that could never have been stored is just another unknown category.
        let slug = CategorySlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found(CATEGORY_NOT_FOUND))?;

        let category = self
            .categories
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(CATEGORY_NOT_FOUND))?;

        let visibility = self.visibility();
        let filter = PostFilter::visible(visibility).in_category(category.id);
        let request = PageRequest::new(query.page, POSTS_PER_PAGE);
        let slice = self.posts.paginate(&filter, request).await?;

        let url = PageUrl::new(format!("/categories/{}", category.slug));
        let categories = self.categories_with_counts(visibility).await?;

        let current = CategoryWithCountDto::from(CategoryWithCount {
            category,
            posts_count: slice.total,
        });

        Ok(CategoryPage {
            category: current,
            posts: Paginated::from_slice(slice, &url),
            categories,
        })
    }
}
