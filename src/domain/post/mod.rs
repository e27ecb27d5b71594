// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;
pub mod visibility;

pub use entity::{Post, PostWithRelations};
pub use repository::{PostFilter, PostReadRepository};
pub use value_objects::{PostId, PostSlug, PostStatus, PostTitle, SearchTerm};
pub use visibility::{PublicVisibility, is_publicly_visible};
