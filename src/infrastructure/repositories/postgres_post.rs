// src/infrastructure/repositories/postgres_post.rs
use super::postgres_category::CategoryRow;
use super::visibility::{contains_pattern, push_public_visibility};
use super::error::corrupt_row;
use super::map_sqlx;
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, PageSlice};
use crate::domain::post::{
    Post, PostFilter, PostId, PostReadRepository, PostSlug, PostTitle, PostWithRelations,
    PublicVisibility,
};
use crate::domain::user::{Author, AuthorName, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const POST_SELECT: &str = "SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.featured_image, \
     p.status, p.is_featured, p.published_at, p.user_id, p.created_at, p.updated_at, \
     u.name AS author_name, u.email AS author_email \
     FROM posts p JOIN users u ON u.id = p.user_id";

const NEWEST_FIRST: &str = " ORDER BY p.published_at DESC, p.id DESC";

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    featured_image: Option<String>,
    status: String,
    is_featured: bool,
    published_at: Option<DateTime<Utc>>,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
}

impl PostRow {
    fn into_relations(self, categories: Vec<Category>) -> DomainResult<PostWithRelations> {
        let id = self.id;
        self.decode(categories).map_err(|err| corrupt_row("posts", id, err))
    }

    fn decode(self, categories: Vec<Category>) -> DomainResult<PostWithRelations> {
        let author_id = UserId::new(self.user_id)?;
        let post = Post {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            slug: PostSlug::new(self.slug)?,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            status: self.status.parse()?,
            is_featured: self.is_featured,
            published_at: self.published_at,
            author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        let author = Author {
            id: author_id,
            name: AuthorName::new(self.author_name)?,
            email: self.author_email,
        };
        Ok(PostWithRelations {
            post,
            author,
            categories,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostCategoryRow {
    post_id: i64,
    #[sqlx(flatten)]
    category: CategoryRow,
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl PostgresPostReadRepository {
    /// Appends the WHERE clause shared by the page query and its count query.
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
        builder.push(" WHERE ");
        push_public_visibility(builder, "p", filter.visibility);

        if let Some(category) = filter.category {
            builder.push(
                " AND EXISTS (SELECT 1 FROM category_post cp \
                 WHERE cp.post_id = p.id AND cp.category_id = ",
            );
            builder.push_bind(i64::from(category));
            builder.push(")");
        }

        if let Some(term) = &filter.search {
            let pattern = contains_pattern(term.as_str());
            builder.push(" AND (p.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR p.excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    async fn fetch(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Vec<PostWithRelations>> {
        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }

    /// Attaches categories to a batch of rows with a single query.
    async fn hydrate(&self, rows: Vec<PostRow>) -> DomainResult<Vec<PostWithRelations>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut categories = self.categories_for(ids).await?;

        rows.into_iter()
            .map(|row| {
                let attached = categories.remove(&row.id).unwrap_or_default();
                row.into_relations(attached)
            })
            .collect()
    }

    async fn categories_for(
        &self,
        post_ids: Vec<i64>,
    ) -> DomainResult<HashMap<i64, Vec<Category>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostCategoryRow>(
            "SELECT cp.post_id, c.id, c.name, c.slug, c.description, c.color
             FROM category_post cp
             JOIN categories c ON c.id = cp.category_id
             WHERE cp.post_id = ANY($1)
             ORDER BY c.name ASC, c.id ASC",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<Category>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.post_id)
                .or_default()
                .push(Category::try_from(row.category)?);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn latest_featured(
        &self,
        visibility: PublicVisibility,
    ) -> DomainResult<Option<PostWithRelations>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);
        builder.push(" WHERE ");
        push_public_visibility(&mut builder, "p", visibility);
        builder.push(" AND p.is_featured = TRUE");
        builder.push(NEWEST_FIRST);
        builder.push(" LIMIT 1");

        Ok(self.fetch(builder).await?.into_iter().next())
    }

    async fn latest(
        &self,
        visibility: PublicVisibility,
        limit: u32,
        exclude: Option<PostId>,
    ) -> DomainResult<Vec<PostWithRelations>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);
        builder.push(" WHERE ");
        push_public_visibility(&mut builder, "p", visibility);
        if let Some(id) = exclude {
            builder.push(" AND p.id <> ");
            builder.push_bind(i64::from(id));
        }
        builder.push(NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        self.fetch(builder).await
    }

    async fn paginate(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<PageSlice<PostWithRelations>> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts p");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(NEWEST_FIRST);
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(page.offset()));

        let items = self.fetch(builder).await?;
        Ok(PageSlice::new(
            items,
            u64::try_from(total).unwrap_or(0),
            page,
        ))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostWithRelations>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);
        builder.push(" WHERE p.slug = ");
        builder.push_bind(slug.as_str().to_string());

        Ok(self.fetch(builder).await?.into_iter().next())
    }

    async fn related_candidates(
        &self,
        visibility: PublicVisibility,
        exclude: PostId,
        categories: &[CategoryId],
    ) -> DomainResult<Vec<PostWithRelations>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i64> = categories.iter().copied().map(i64::from).collect();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);
        builder.push(" WHERE ");
        push_public_visibility(&mut builder, "p", visibility);
        builder.push(" AND p.id <> ");
        builder.push_bind(i64::from(exclude));
        builder.push(
            " AND EXISTS (SELECT 1 FROM category_post cp \
             WHERE cp.post_id = p.id AND cp.category_id = ANY(",
        );
        builder.push_bind(category_ids);
        builder.push("))");
        builder.push(NEWEST_FIRST);

        self.fetch(builder).await
    }
}
