use axum::extract::{Query, State};
use axum::Json;

use crate::domain::filter::FaturaFilter;
use crate::transport::http::types::{AppState, Envelope};

#[utoipa::path(
    get,
    path = "/api/faturalar",
    responses(
        (status = 200, description = "Invoice lines, live or degraded (see envelope mode)", body = Envelope)
    )
)]
pub async fn faturalar_handler(State(state): State<AppState>) -> Json<Envelope> {
    Json(state.data_service.faturalar().await)
}

#[utoipa::path(
    get,
    path = "/api/faturalar/filtreli",
    params(
        ("carikod" = Option<String>, Query, description = "Customer code (exact match)"),
        ("baslangicTarih" = Option<String>, Query, description = "Range start, YYYY-MM-DD inclusive"),
        ("bitisTarih" = Option<String>, Query, description = "Range end, YYYY-MM-DD inclusive")
    ),
    responses(
        (status = 200, description = "Filtered invoice lines with the effective filter echoed back", body = Envelope)
    )
)]
pub async fn faturalar_filtreli_handler(
    State(state): State<AppState>,
    Query(filter): Query<FaturaFilter>,
) -> Json<Envelope> {
    Json(state.data_service.faturalar_filtreli(&filter).await)
}
