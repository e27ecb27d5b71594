// src/domain/post/visibility.rs
//! The one definition of "publicly visible".
//!
//! A post is visible when it is published, has a publication timestamp and
//! that timestamp is not in the future. Every read path goes through
//! [`PublicVisibility`]; the SQL rendering lives in
//! `infrastructure::repositories::visibility` and must stay equivalent.

use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::PostStatus;
use chrono::{DateTime, Utc};

pub fn is_publicly_visible(
    status: PostStatus,
    published_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    status == PostStatus::Published && published_at.is_some_and(|at| at <= now)
}

/// Visibility scope evaluated at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicVisibility {
    now: DateTime<Utc>,
}

impl PublicVisibility {
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Status value a row must carry to be visible.
    pub const fn required_status(&self) -> PostStatus {
        PostStatus::Published
    }

    pub fn is_satisfied_by(&self, post: &Post) -> bool {
        is_publicly_visible(post.status, post.published_at, self.now)
    }
}
