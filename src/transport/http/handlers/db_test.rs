use axum::extract::State;
use axum::Json;

use crate::transport::http::types::{AppState, DbTestResponse};

#[utoipa::path(
    get,
    path = "/api/db-test",
    responses(
        (status = 200, description = "Connectivity probe result (success carried in the body)", body = DbTestResponse)
    )
)]
pub async fn db_test_handler(State(state): State<AppState>) -> Json<DbTestResponse> {
    Json(state.data_service.db_test().await)
}
