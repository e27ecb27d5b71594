// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_comment;
mod postgres_post;
mod visibility;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryReadRepository;
pub use postgres_comment::PostgresCommentReadRepository;
pub use postgres_post::PostgresPostReadRepository;
