// src/infrastructure/repositories/postgres_category.rs
use super::{error::corrupt_row, map_sqlx, visibility::push_public_visibility};
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryReadRepository, CategorySlug, CategoryWithCount,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PublicVisibility;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryReadRepository {
    pool: PgPool,
}

impl PostgresCategoryReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct CategoryRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) slug: String,
    pub(super) description: Option<String>,
    pub(super) color: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        let id = row.id;
        row.decode().map_err(|err| corrupt_row("categories", id, err))
    }
}

impl CategoryRow {
    fn decode(self) -> DomainResult<Category> {
        Ok(Category {
            id: CategoryId::new(self.id)?,
            name: CategoryName::new(self.name)?,
            slug: CategorySlug::new(self.slug)?,
            description: self.description,
            color: self.color,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    posts_count: i64,
}

impl TryFrom<CategoryCountRow> for CategoryWithCount {
    type Error = DomainError;

    fn try_from(row: CategoryCountRow) -> Result<Self, Self::Error> {
        Ok(CategoryWithCount {
            category: Category::try_from(row.category)?,
            posts_count: u64::try_from(row.posts_count).unwrap_or(0),
        })
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryReadRepository {
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description, color FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list_with_post_counts(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Vec<CategoryWithCount>> {
        // The visibility condition sits in the join so empty categories keep a zero count.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT c.id, c.name, c.slug, c.description, c.color, COUNT(p.id) AS posts_count \
             FROM categories c \
             LEFT JOIN category_post cp ON cp.category_id = c.id \
             LEFT JOIN posts p ON p.id = cp.post_id AND ",
        );
        push_public_visibility(&mut builder, "p", visibility);
        builder.push(
            " GROUP BY c.id, c.name, c.slug, c.description, c.color ORDER BY c.name ASC, c.id ASC",
        );

        let rows = builder
            .build_query_as::<CategoryCountRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(CategoryWithCount::try_from).collect()
    }
}
