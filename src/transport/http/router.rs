use crate::domain::filter::FaturaFilter;
use crate::domain::model::{Depo, FaturaRecord, FisDraft, MalzemeFisTipi};
use crate::transport::http::handlers::{db_test, depolar, faturalar, fis, health, siparisler};
use crate::transport::http::types::{
    DataMode, DbTestResponse, Envelope, FisNoResponse, HealthResponse,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_handler,
        db_test::db_test_handler,
        faturalar::faturalar_handler,
        faturalar::faturalar_filtreli_handler,
        fis::latest_fis_no_handler,
        fis::malzeme_fis_tipleri_handler,
        depolar::depolar_handler,
        siparisler::siparisler_handler
    ),
    components(schemas(
        Envelope,
        DataMode,
        HealthResponse,
        DbTestResponse,
        FisNoResponse,
        FaturaFilter,
        FaturaRecord,
        MalzemeFisTipi,
        Depo,
        FisDraft
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

// Exactly one handler per path.
pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/db-test", get(db_test::db_test_handler))
        .route("/api/faturalar", get(faturalar::faturalar_handler))
        .route(
            "/api/faturalar/filtreli",
            get(faturalar::faturalar_filtreli_handler),
        )
        .route("/api/latest-fis-no", get(fis::latest_fis_no_handler))
        .route(
            "/api/malzeme-fis-tipleri",
            get(fis::malzeme_fis_tipleri_handler),
        )
        .route("/api/depolar", get(depolar::depolar_handler))
        .route("/api/siparisler", get(siparisler::siparisler_handler))
        .with_state(app_state)
}
