// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use blogtastic_core::domain::category::{Category, CategoryId, CategoryName, CategorySlug};
use blogtastic_core::domain::comment::{Comment, CommentId, CommentStatus};
use blogtastic_core::domain::post::{
    Post, PostId, PostSlug, PostStatus, PostTitle, PostWithRelations,
};
use blogtastic_core::domain::user::{Author, AuthorName, UserId};

use super::mocks::fixed_now;

/// 固定時刻から `hours` 時間前
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    fixed_now() - Duration::hours(hours)
}

pub fn author() -> Author {
    Author {
        id: UserId::new(1).unwrap(),
        name: AuthorName::new("Alex Chen").unwrap(),
        email: "alex@example.com".into(),
    }
}

/// 名前からスラグを作ったカテゴリ
pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        slug: CategorySlug::new(name.to_lowercase().replace(' ', "-")).unwrap(),
        description: Some(format!("All about {name}")),
        color: "#60a5fa".into(),
    }
}

pub fn comment(id: i64, post_id: i64, status: CommentStatus, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        post_id: PostId::new(post_id).unwrap(),
        author_name: format!("Reader {id}"),
        author_email: format!("reader{id}@example.net"),
        content: format!("Comment number {id}"),
        status,
        created_at,
    }
}

/// 既定では `id` 時間前に公開済みの記事を作る
pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    status: PostStatus,
    is_featured: bool,
    published_at: Option<DateTime<Utc>>,
    categories: Vec<Category>,
}

impl PostBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            excerpt: format!("Excerpt of post {id}"),
            content: "Some words about the topic at hand.".into(),
            status: PostStatus::Published,
            is_featured: false,
            published_at: Some(hours_ago(id)),
            categories: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn published_hours_ago(mut self, hours: i64) -> Self {
        self.published_at = Some(hours_ago(hours));
        self
    }

    /// 公開ステータスだが公開日時が未来
    pub fn scheduled_in_hours(mut self, hours: i64) -> Self {
        self.published_at = Some(fixed_now() + Duration::hours(hours));
        self
    }

    /// 公開ステータスだが公開日時なし
    pub fn unscheduled(mut self) -> Self {
        self.published_at = None;
        self
    }

    pub fn categories(mut self, categories: &[Category]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    pub fn build(self) -> PostWithRelations {
        let author = author();
        let created_at = hours_ago(1000);
        PostWithRelations {
            post: Post {
                id: PostId::new(self.id).unwrap(),
                title: PostTitle::new(self.title).unwrap(),
                slug: PostSlug::new(self.slug).unwrap(),
                excerpt: self.excerpt,
                content: self.content,
                featured_image: None,
                status: self.status,
                is_featured: self.is_featured,
                published_at: self.published_at,
                author_id: author.id,
                created_at,
                updated_at: created_at,
            },
            author,
            categories: self.categories,
        }
    }
}
