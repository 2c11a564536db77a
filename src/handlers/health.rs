use actix_web::HttpResponse;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use super::iso_timestamp;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Current server time, ISO-8601.
    pub timestamp: String,
}

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: iso_timestamp(Utc::now()),
    })
}
