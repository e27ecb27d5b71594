// src/application/dto/posts.rs
use crate::domain::comment::Comment;
use crate::domain::post::PostWithRelations;
use crate::domain::user::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, CommentDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name.into_inner(),
            email: author.email,
        }
    }
}

/// A post as it appears in listings: everything but the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub is_featured: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorDto,
    pub categories: Vec<CategoryDto>,
}

impl From<PostWithRelations> for PostSummaryDto {
    fn from(value: PostWithRelations) -> Self {
        let PostWithRelations {
            post,
            author,
            categories,
        } = value;
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            is_featured: post.is_featured,
            published_at: post.published_at,
            author: author.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub is_featured: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time_minutes: u32,
    pub author: AuthorDto,
    pub categories: Vec<CategoryDto>,
    /// Approved comments, newest first.
    pub comments: Vec<CommentDto>,
}

impl PostDetailDto {
    pub fn from_parts(value: PostWithRelations, comments: Vec<Comment>) -> Self {
        let reading_time_minutes = value.post.reading_time_minutes();
        let PostWithRelations {
            post,
            author,
            categories,
        } = value;
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            content: post.content,
            featured_image: post.featured_image,
            is_featured: post.is_featured,
            published_at: post.published_at,
            reading_time_minutes,
            author: author.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}
