// src/domain/user/entity.rs
use crate::domain::user::value_objects::{AuthorName, UserId};

/// Public view of the user owning a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub name: AuthorName,
    pub email: String,
}
