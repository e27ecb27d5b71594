// src/domain/post/entity.rs
use crate::domain::category::{Category, CategoryId};
use crate::domain::post::value_objects::{PostId, PostSlug, PostStatus, PostTitle};
use crate::domain::user::{Author, UserId};
use chrono::{DateTime, Utc};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Estimated reading time, never less than a minute.
    pub fn reading_time_minutes(&self) -> u32 {
        let words = self.content.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

/// A post with its eagerly loaded author and categories.
#[derive(Debug, Clone)]
pub struct PostWithRelations {
    pub post: Post,
    pub author: Author,
    pub categories: Vec<Category>,
}

impl PostWithRelations {
    pub fn id(&self) -> PostId {
        self.post.id
    }

    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|category| category.id).collect()
    }

    pub fn shares_category_with(&self, ids: &[CategoryId]) -> bool {
        self.categories
            .iter()
            .any(|category| ids.contains(&category.id))
    }
}
