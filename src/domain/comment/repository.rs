// src/domain/comment/repository.rs
use crate::domain::comment::entity::Comment;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    /// Approved comments of a post, newest first.
    async fn approved_for_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
}
