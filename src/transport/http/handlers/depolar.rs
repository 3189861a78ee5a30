use axum::extract::State;
use axum::Json;

use crate::transport::http::types::{AppState, Envelope};

#[utoipa::path(
    get,
    path = "/api/depolar",
    responses(
        (status = 200, description = "Active warehouse addresses", body = Envelope)
    )
)]
pub async fn depolar_handler(State(state): State<AppState>) -> Json<Envelope> {
    Json(state.data_service.depolar().await)
}
