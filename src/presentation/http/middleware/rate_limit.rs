// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitConfig;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Milliseconds between two replenished requests for `per_second` requests a second.
fn replenish_interval_ms(config: RateLimitConfig) -> u64 {
    (1000 / u64::from(config.per_second.get())).max(1)
}

/// Per-IP limiter. Keys come from forwarding headers or the peer address, so the
/// router must be served with connect info.
pub fn rate_limit_layer(config: RateLimitConfig) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_interval_ms(config));
    builder.burst_size(config.burst.get());
    let Some(governor) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        tracing::warn!(?config, "invalid rate limit configuration, limiter disabled");
        return None;
    };

    Some(GovernorLayer::new(governor))
}
