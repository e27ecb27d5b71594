use anyhow::Result;
use blogtastic_core::application::{ports::time::Clock, services::ApplicationServices};
use blogtastic_core::config::AppConfig;
use blogtastic_core::domain::{
    category::CategoryReadRepository, comment::CommentReadRepository, post::PostReadRepository,
};
use blogtastic_core::infrastructure::{
    database,
    repositories::{
        PostgresCategoryReadRepository, PostgresCommentReadRepository, PostgresPostReadRepository,
    },
    time::SystemClock,
};
use blogtastic_core::presentation::http::{routes::build_router_with_config, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let post_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryReadRepository> =
        Arc::new(PostgresCategoryReadRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentReadRepository> =
        Arc::new(PostgresCommentReadRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        category_repo,
        comment_repo,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router_with_config(state, &config);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        rate_limited = config.rate_limit().is_some(),
        "listening on {address}"
    );

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
