// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitConfig};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{blog, categories, posts, system},
    middleware::rate_limit::rate_limit_layer,
    openapi,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router with the default per-IP rate limit and permissive CORS.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// The rate limiter keys on the client address, so routers built with it
/// enabled must be served through `into_make_service_with_connect_info`.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let rate_limit = enable_rate_limiter.then(RateLimitConfig::default);
    assemble(state, &[], rate_limit)
}

pub fn build_router_with_config(state: HttpState, config: &AppConfig) -> Router {
    assemble(state, config.allowed_origins(), config.rate_limit())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn assemble(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: Option<RateLimitConfig>,
) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/", get(blog::home))
        .route("/blog", get(blog::listing))
        .route("/posts/{slug}", get(posts::show))
        .route("/categories/{slug}", get(categories::show))
        .route("/health-check", get(system::health));

    if let Some(layer) = rate_limit.and_then(rate_limit_layer) {
        router = router.layer(layer);
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}
