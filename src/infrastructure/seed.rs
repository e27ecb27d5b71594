// src/infrastructure/seed.rs
//! Demo content for local development.
//!
//! Generation is split from persistence so the shape of the generated data can
//! be checked without a database.

use crate::application::ports::util::SlugGenerator;
use crate::domain::comment::CommentStatus;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostStatus;
use crate::infrastructure::repositories::map_sqlx;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use std::collections::HashSet;

pub const AUTHOR_COUNT: usize = 5;
pub const CATEGORY_COUNT: usize = 12;
pub const POST_COUNT: usize = 25;
const MAX_COMMENTS_PER_POST: usize = 8;
const PUBLISHED_WITHIN_DAYS: i64 = 180;

const CATEGORY_NAMES: [&str; 20] = [
    "Technology",
    "Web Development",
    "Design",
    "JavaScript",
    "Rust",
    "Go",
    "React",
    "Vue.js",
    "CSS",
    "HTML",
    "Mobile Apps",
    "iOS",
    "Android",
    "Python",
    "Data Science",
    "Machine Learning",
    "AI",
    "DevOps",
    "Cloud",
    "Security",
];

const CATEGORY_COLORS: [&str; 8] = [
    "#34d399", "#60a5fa", "#fb923c", "#fbbf24", "#f472b6", "#a78bfa", "#4ade80", "#f87171",
];

const FIRST_NAMES: [&str; 12] = [
    "Alex", "Sam", "Jordan", "Taylor", "Morgan", "Riley", "Casey", "Jamie", "Avery", "Quinn",
    "Rowan", "Emery",
];

const LAST_NAMES: [&str; 12] = [
    "Chen", "Garcia", "Okafor", "Novak", "Tanaka", "Silva", "Kowalski", "Haddad", "Larsen",
    "Moreau", "Patel", "Reyes",
];

const WORDS: [&str; 48] = [
    "async", "borrow", "cache", "deploy", "edge", "feature", "graph", "handler", "index", "join",
    "kernel", "layout", "module", "network", "option", "pattern", "query", "render", "schema",
    "thread", "update", "vector", "widget", "yield", "build", "component", "design", "event",
    "framework", "guide", "hook", "interface", "library", "migration", "practice", "release",
    "service", "testing", "workflow", "browser", "server", "mobile", "cloud", "review", "team",
    "tooling", "platform", "performance",
];

#[derive(Debug, Clone)]
pub struct SeedAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SeedCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct SeedComment {
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SeedPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub is_featured: bool,
    pub published_at: DateTime<Utc>,
    pub author: usize,
    pub categories: Vec<usize>,
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub authors: Vec<SeedAuthor>,
    pub categories: Vec<SeedCategory>,
    pub posts: Vec<SeedPost>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub authors: usize,
    pub categories: usize,
    pub posts: usize,
    pub comments: usize,
}

/// Appends `-1`, `-2`, ... until the slug is unused.
fn unique_slug(base: String, used: &mut HashSet<String>) -> String {
    let base = if base.is_empty() { "post".to_string() } else { base };
    let mut candidate = base.clone();
    let mut counter = 1u64;
    while used.contains(&candidate) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let body: Vec<&str> = (0..words)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect();
    format!("{}.", capitalise(&body.join(" ")))
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| {
            let words = rng.gen_range(6..=14);
            sentence(rng, words)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Markdown-ish body: introduction, headed sections every fourth paragraph, conclusion.
fn blog_content<R: Rng + ?Sized>(rng: &mut R) -> String {
    let paragraph_count = rng.gen_range(8..=15);
    let mut paragraphs = Vec::with_capacity(paragraph_count);

    for i in 0..paragraph_count {
        let block = if i == 0 {
            format!("# Introduction\n\n{}", paragraph(rng, 4))
        } else if i == paragraph_count - 1 {
            format!("# Conclusion\n\n{}", paragraph(rng, 3))
        } else if i % 4 == 0 {
            let heading = sentence(rng, 3);
            format!(
                "## {}\n\n{}",
                heading.trim_end_matches('.'),
                paragraph(rng, 4)
            )
        } else {
            let sentences = rng.gen_range(3..=6);
            paragraph(rng, sentences)
        };
        paragraphs.push(block);
    }

    paragraphs.join("\n\n")
}

fn person<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Chen");
    (format!("{first} {last}"), format!("{}.{}", first, last).to_lowercase())
}

pub fn plan<R: Rng + ?Sized>(
    rng: &mut R,
    slugger: &dyn SlugGenerator,
    now: DateTime<Utc>,
) -> SeedPlan {
    let mut authors = vec![SeedAuthor {
        name: "Alex Chen".into(),
        email: "alex@example.com".into(),
    }];
    while authors.len() < AUTHOR_COUNT {
        let (name, handle) = person(rng);
        authors.push(SeedAuthor {
            name,
            email: format!("{handle}{}@example.com", authors.len()),
        });
    }

    let mut names: Vec<&str> = CATEGORY_NAMES.to_vec();
    names.shuffle(rng);
    let mut category_slugs = HashSet::new();
    let categories: Vec<SeedCategory> = names
        .into_iter()
        .take(CATEGORY_COUNT)
        .map(|name| SeedCategory {
            name: name.to_string(),
            slug: unique_slug(slugger.slugify(name), &mut category_slugs),
            description: sentence(rng, 10),
            color: CATEGORY_COLORS
                .choose(rng)
                .copied()
                .unwrap_or(CATEGORY_COLORS[0])
                .to_string(),
        })
        .collect();

    let mut post_slugs = HashSet::new();
    let mut posts = Vec::with_capacity(POST_COUNT);
    for _ in 0..POST_COUNT {
        let title_words = rng.gen_range(4..=8);
        let title = sentence(rng, title_words).trim_end_matches('.').to_string();
        let published_at =
            now - Duration::minutes(rng.gen_range(1..=PUBLISHED_WITHIN_DAYS * 24 * 60));

        let category_count = rng.gen_range(1..=3).min(categories.len());
        let picked = rand::seq::index::sample(rng, categories.len(), category_count).into_vec();

        let comment_count = rng.gen_range(0..=MAX_COMMENTS_PER_POST);
        let comments = (0..comment_count)
            .map(|_| {
                let (author_name, handle) = person(rng);
                let age = (now - published_at).num_minutes().max(1);
                SeedComment {
                    author_name,
                    author_email: format!("{handle}@example.net"),
                    content: paragraph(rng, 2),
                    status: if rng.gen_bool(0.8) {
                        CommentStatus::Approved
                    } else {
                        CommentStatus::Pending
                    },
                    created_at: published_at + Duration::minutes(rng.gen_range(0..=age)),
                }
            })
            .collect();

        posts.push(SeedPost {
            slug: unique_slug(slugger.slugify(&title), &mut post_slugs),
            title,
            excerpt: paragraph(rng, 2),
            content: blog_content(rng),
            featured_image: format!(
                "https://picsum.photos/800/400?random={}",
                rng.gen_range(1..=1000)
            ),
            is_featured: rng.gen_bool(0.2),
            published_at,
            author: rng.gen_range(0..authors.len()),
            categories: picked,
            comments,
        });
    }

    // The home page always has something to feature.
    if let Some(first) = posts.first_mut() {
        first.is_featured = true;
    }

    SeedPlan {
        authors,
        categories,
        posts,
    }
}

/// Inserts the plan in one transaction. Does nothing when posts already exist.
pub async fn write(pool: &PgPool, plan: &SeedPlan) -> DomainResult<SeedSummary> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)?;
    if existing > 0 {
        tracing::info!(existing, "posts already present, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut tx = pool.begin().await.map_err(map_sqlx)?;
    let mut summary = SeedSummary::default();

    let mut author_ids = Vec::with_capacity(plan.authors.len());
    for author in &plan.authors {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email) VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
             RETURNING id",
        )
        .bind(&author.name)
        .bind(&author.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        author_ids.push(id);
        summary.authors += 1;
    }

    let mut category_ids = Vec::with_capacity(plan.categories.len());
    for category in &plan.categories {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, slug, description, color) VALUES ($1, $2, $3, $4)
             ON CONFLICT (slug) DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
             RETURNING id",
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(&category.color)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        category_ids.push(id);
        summary.categories += 1;
    }

    for post in &plan.posts {
        let Some(&author_id) = author_ids.get(post.author) else {
            continue;
        };

        let post_id: i64 = sqlx::query_scalar(
            "INSERT INTO posts
                 (title, slug, excerpt, content, featured_image, status, is_featured, published_at, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.featured_image)
        .bind(PostStatus::Published.as_str())
        .bind(post.is_featured)
        .bind(post.published_at)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        summary.posts += 1;

        for &index in &post.categories {
            let Some(&category_id) = category_ids.get(index) else {
                continue;
            };
            sqlx::query("INSERT INTO category_post (post_id, category_id) VALUES ($1, $2)")
                .bind(post_id)
                .bind(category_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        for comment in &post.comments {
            sqlx::query(
                "INSERT INTO comments
                     (post_id, author_name, author_email, content, status, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(post_id)
            .bind(&comment.author_name)
            .bind(&comment.author_email)
            .bind(&comment.content)
            .bind(comment.status.as_str())
            .bind(comment.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            summary.comments += 1;
        }
    }

    tx.commit().await.map_err(map_sqlx)?;
    Ok(summary)
}
