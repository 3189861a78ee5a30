use axum::Json;

use crate::transport::http::types::HealthResponse;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "API running".to_string(),
        status: "OK".to_string(),
    })
}
