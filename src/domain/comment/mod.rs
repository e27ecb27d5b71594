// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId, CommentStatus};
pub use repository::CommentReadRepository;
