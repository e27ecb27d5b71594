// src/infrastructure/repositories/postgres_comment.rs
use super::{error::corrupt_row, map_sqlx};
use crate::domain::comment::{Comment, CommentId, CommentReadRepository, CommentStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_name: String,
    author_email: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let id = row.id;
        row.decode().map_err(|err| corrupt_row("comments", id, err))
    }
}

impl CommentRow {
    fn decode(self) -> DomainResult<Comment> {
        Ok(Comment {
            id: CommentId::new(self.id)?,
            post_id: PostId::new(self.post_id)?,
            author_name: self.author_name,
            author_email: self.author_email,
            content: self.content,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, author_name, author_email, content, status, created_at
             FROM comments
             WHERE post_id = $1 AND status = $2
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(post_id))
        .bind(CommentStatus::Approved.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
