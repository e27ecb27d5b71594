// src/bin/seed_demo_content.rs
use anyhow::Result;
use blogtastic_core::{
    application::ports::time::Clock,
    config::AppConfig,
    infrastructure::{database, seed, time::SystemClock, util::DefaultSlugGenerator},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let plan = {
        let mut rng = rand::thread_rng();
        seed::plan(&mut rng, &DefaultSlugGenerator, SystemClock.now())
    };
    let summary = seed::write(&pool, &plan).await?;

    tracing::info!(
        authors = summary.authors,
        categories = summary.categories,
        posts = summary.posts,
        comments = summary.comments,
        "demo content seeded"
    );
    Ok(())
}
