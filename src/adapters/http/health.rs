//! Liveness endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Rider Purchases Bot";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub message: &'static str,
}

/// GET / and GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        message: "رايدر المشتريات يعمل بنجاح",
    })
}

pub fn health_routes() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}
