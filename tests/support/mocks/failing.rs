// tests/support/mocks/failing.rs
use async_trait::async_trait;
use blogtastic_core::domain::{
    category::CategoryId,
    errors::{DomainError, DomainResult},
    pagination::{PageRequest, PageSlice},
    post::{PostFilter, PostId, PostReadRepository, PostSlug, PostWithRelations, PublicVisibility},
};

/// 常に永続化エラーを返す記事リポジトリ
#[derive(Clone, Default)]
pub struct FailingPostRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database unavailable".into()))
}

#[async_trait]
impl PostReadRepository for FailingPostRepo {
    async fn latest_featured(
        &self,
        _visibility: PublicVisibility,
    ) -> DomainResult<Option<PostWithRelations>> {
        unavailable()
    }

    async fn latest(
        &self,
        _visibility: PublicVisibility,
        _limit: u32,
        _exclude: Option<PostId>,
    ) -> DomainResult<Vec<PostWithRelations>> {
        unavailable()
    }

    async fn paginate(
        &self,
        _filter: &PostFilter,
        _page: PageRequest,
    ) -> DomainResult<PageSlice<PostWithRelations>> {
        unavailable()
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<PostWithRelations>> {
        unavailable()
    }

    async fn related_candidates(
        &self,
        _visibility: PublicVisibility,
        _exclude: PostId,
        _categories: &[CategoryId],
    ) -> DomainResult<Vec<PostWithRelations>> {
        unavailable()
    }
}
