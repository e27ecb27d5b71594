// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, CategoryWithCount};
use crate::domain::category::value_objects::CategorySlug;
use crate::domain::errors::DomainResult;
use crate::domain::post::visibility::PublicVisibility;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;

    /// Every category ordered by name ascending, counting only the posts
    /// inside `visibility`.
    async fn list_with_post_counts(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Vec<CategoryWithCount>>;
}
