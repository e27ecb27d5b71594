// src/application/dto/categories.rs
use crate::domain::category::{Category, CategoryWithCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            color: category.color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryWithCountDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    /// Number of publicly visible posts in the category.
    pub posts_count: u64,
}

impl From<CategoryWithCount> for CategoryWithCountDto {
    fn from(value: CategoryWithCount) -> Self {
        let CategoryWithCount {
            category,
            posts_count,
        } = value;
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            color: category.color,
            posts_count,
        }
    }
}
