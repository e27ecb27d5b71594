// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<String>,
    /// Display hint only, e.g. `#34d399`.
    pub color: String,
}

/// A category annotated with the number of publicly visible posts filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub posts_count: u64,
}
