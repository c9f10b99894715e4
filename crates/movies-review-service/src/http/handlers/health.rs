use crate::http::model::HealthResponse;
use axum::Json;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Responds with the plain-text greeting `Hello World`.
pub async fn hello_world_handler() -> &'static str {
    "Hello World"
}
