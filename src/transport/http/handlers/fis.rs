use axum::extract::State;
use axum::Json;

use crate::transport::http::types::{AppState, Envelope, FisNoResponse};

#[utoipa::path(
    get,
    path = "/api/latest-fis-no",
    responses(
        (status = 200, description = "Latest and next fiş number", body = FisNoResponse)
    )
)]
pub async fn latest_fis_no_handler(State(state): State<AppState>) -> Json<FisNoResponse> {
    Json(state.data_service.latest_fis_no().await)
}

#[utoipa::path(
    get,
    path = "/api/malzeme-fis-tipleri",
    responses(
        (status = 200, description = "Fiş type reference list", body = Envelope)
    )
)]
pub async fn malzeme_fis_tipleri_handler(State(state): State<AppState>) -> Json<Envelope> {
    Json(state.data_service.malzeme_fis_tipleri().await)
}
