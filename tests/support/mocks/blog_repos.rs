// tests/support/mocks/blog_repos.rs
use async_trait::async_trait;
use blogtastic_core::domain::{
    category::{Category, CategoryId, CategoryReadRepository, CategorySlug, CategoryWithCount},
    comment::{Comment, CommentReadRepository},
    errors::DomainResult,
    pagination::{PageRequest, PageSlice},
    post::{PostFilter, PostId, PostReadRepository, PostSlug, PostWithRelations, PublicVisibility},
};
use std::cmp::Reverse;
use std::sync::Arc;

/// インメモリのブログデータ。可視性判定はドメインの述語をそのまま使う。
#[derive(Clone, Default)]
pub struct InMemoryBlog {
    pub posts: Vec<PostWithRelations>,
    pub categories: Vec<Category>,
    pub comments: Vec<Comment>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: impl IntoIterator<Item = PostWithRelations>) -> Self {
        self.posts.extend(posts);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_comments(mut self, comments: impl IntoIterator<Item = Comment>) -> Self {
        self.comments.extend(comments);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 公開中の記事を新しい順に返す
    pub fn visible_newest_first(&self, visibility: PublicVisibility) -> Vec<PostWithRelations> {
        let mut visible: Vec<PostWithRelations> = self
            .posts
            .iter()
            .filter(|p| visibility.is_satisfied_by(&p.post))
            .cloned()
            .collect();
        visible.sort_by_key(|p| Reverse((p.post.published_at, p.post.id.0)));
        visible
    }

    fn matches_filter(filter: &PostFilter, post: &PostWithRelations) -> bool {
        let in_category = filter
            .category
            .is_none_or(|id| post.shares_category_with(&[id]));
        let matches_search = filter.search.as_ref().is_none_or(|term| {
            term.matches(post.post.title.as_str()) || term.matches(&post.post.excerpt)
        });
        in_category && matches_search
    }
}

#[async_trait]
impl PostReadRepository for InMemoryBlog {
    async fn latest_featured(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Option<PostWithRelations>> {
        Ok(self
            .visible_newest_first(visibility)
            .into_iter()
            .find(|p| p.post.is_featured))
    }

    async fn latest(
        &self,
        visibility: PublicVisibility,
        limit: u32,
        exclude: Option<PostId>,
    ) -> DomainResult<Vec<PostWithRelations>> {
        Ok(self
            .visible_newest_first(visibility)
            .into_iter()
            .filter(|p| Some(p.id()) != exclude)
            .take(limit as usize)
            .collect())
    }

    async fn paginate(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<PageSlice<PostWithRelations>> {
        let matching: Vec<PostWithRelations> = self
            .visible_newest_first(filter.visibility)
            .into_iter()
            .filter(|p| Self::matches_filter(filter, p))
            .collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageSlice::new(items, total, page))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithRelations>> {
        Ok(self.posts.iter().find(|p| &p.post.slug == slug).cloned())
    }

    async fn related_candidates(
        &self,
        visibility: PublicVisibility,
        exclude: PostId,
        categories: &[CategoryId],
    ) -> DomainResult<Vec<PostWithRelations>> {
        Ok(self
            .visible_newest_first(visibility)
            .into_iter()
            .filter(|p| p.id() != exclude && p.shares_category_with(categories))
            .collect())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryBlog {
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn list_with_post_counts(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Vec<CategoryWithCount>> {
        let visible = self.visible_newest_first(visibility);
        let mut categories: Vec<CategoryWithCount> = self
            .categories
            .iter()
            .map(|category| CategoryWithCount {
                category: category.clone(),
                posts_count: visible
                    .iter()
                    .filter(|p| p.shares_category_with(&[category.id]))
                    .count() as u64,
            })
            .collect();
        categories.sort_by(|a, b| {
            a.category
                .name
                .as_str()
                .cmp(b.category.name.as_str())
                .then(a.category.id.0.cmp(&b.category.id.0))
        });
        Ok(categories)
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryBlog {
    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.is_approved())
            .cloned()
            .collect();
        comments.sort_by_key(|c| Reverse((c.created_at, c.id.0)));
        Ok(comments)
    }
}
