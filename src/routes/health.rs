// Health check

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health - Liveness probe
#[utoipa::path(
    get,
    tag = "health",
    operation_id = "health",
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "api-cookbook".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}
