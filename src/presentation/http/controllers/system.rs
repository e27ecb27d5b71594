// src/presentation/http/controllers/system.rs
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "crate::application::dto::serde_time")]
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health-check",
    responses(
        (status = 200, description = "Service health check.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: state.services.clock().now(),
    })
}
