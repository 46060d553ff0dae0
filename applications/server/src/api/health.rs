/// Health check route
use axum::Json;

/// GET /api/health
/// Liveness probe; reports the running service version
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
