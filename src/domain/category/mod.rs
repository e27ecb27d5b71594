// src/domain/category/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, CategoryWithCount};
pub use repository::CategoryReadRepository;
pub use value_objects::{CategoryId, CategoryName, CategorySlug};
