use axum::extract::State;
use axum::Json;

use crate::transport::http::types::{AppState, Envelope};

#[utoipa::path(
    get,
    path = "/api/siparisler",
    responses(
        (status = 200, description = "Purchase-order lines, live or degraded", body = Envelope)
    )
)]
pub async fn siparisler_handler(State(state): State<AppState>) -> Json<Envelope> {
    Json(state.data_service.siparisler().await)
}
