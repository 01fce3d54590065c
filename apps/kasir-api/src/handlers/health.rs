//! Health check.

use axum::Json;
use serde::Serialize;

/// Fixed liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /health`. Always 200, whatever the state of storage.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "API Running",
    })
}
