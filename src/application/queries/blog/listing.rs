use super::{BLOG_PATH, BlogQueryService, POSTS_PER_PAGE};
use crate::{
    application::{
        dto::{BlogListingPage, PageUrl, Paginated},
        error::ApplicationResult,
    },
    domain::{
        pagination::PageRequest,
        post::{PostFilter, SearchTerm},
    },
};

pub struct BlogListingQuery {
    pub page: u32,
    pub search: Option<String>,
}

impl BlogQueryService {
    #[tracing::instrument(skip_all, fields(page = query.page))]
    pub async fn blog_listing(
        &self,
        query: BlogListingQuery,
    ) -> ApplicationResult<BlogListingPage> {
        let visibility = self.visibility();
        let search = SearchTerm::parse(query.search.as_deref());
        let request = PageRequest::new(query.page, POSTS_PER_PAGE);

        let filter = PostFilter::visible(visibility).with_search(search.clone());
        let slice = self.posts.paginate(&filter, request).await?;

        let mut url = PageUrl::new(BLOG_PATH);
        if let Some(term) = &search {
            url = url.with_query("search", term.as_str());
        }

        let categories = self.categories_with_counts(visibility).await?;

        tracing::debug!(
            total = slice.total,
            returned = slice.items.len(),
            searching = search.is_some(),
            "assembled blog listing"
        );

        Ok(BlogListingPage {
            posts: Paginated::from_slice(slice, &url),
            categories,
            search: search.map(|term| term.as_str().to_string()),
        })
    }
}
