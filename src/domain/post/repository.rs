// src/domain/post/repository.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, PageSlice};
use crate::domain::post::entity::PostWithRelations;
use crate::domain::post::value_objects::{PostId, PostSlug, SearchTerm};
use crate::domain::post::visibility::PublicVisibility;
use async_trait::async_trait;

/// Filter for paginated post listings. The visibility scope is mandatory.
#[derive(Debug, Clone)]
pub struct PostFilter {
    pub visibility: PublicVisibility,
    pub category: Option<CategoryId>,
    pub search: Option<SearchTerm>,
}

impl PostFilter {
    pub const fn visible(visibility: PublicVisibility) -> Self {
        Self {
            visibility,
            category: None,
            search: None,
        }
    }

    pub const fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }
}

/// Read side of the post store. List methods return posts ordered by
/// `published_at` descending (ties broken by id descending) with author and
/// categories loaded.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    /// Most recently published featured post inside `visibility`.
    async fn latest_featured(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Option<PostWithRelations>>;

    async fn latest(
        &self,
        visibility: PublicVisibility,
        limit: u32,
        exclude: Option<PostId>,
    ) -> DomainResult<Vec<PostWithRelations>>;

    async fn paginate(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<PageSlice<PostWithRelations>>;

    /// Looks a post up by slug regardless of its status.
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithRelations>>;

    /// Visible posts other than `exclude` filed under any of `categories`.
    async fn related_candidates(
        &self,
        visibility: PublicVisibility,
        exclude: PostId,
        categories: &[CategoryId],
    ) -> DomainResult<Vec<PostWithRelations>>;
}
