//! End-to-end round trips against an in-process server forced into static
//! mode: every endpoint serves its built-in sample data, reports
//! `mode: "test"`, and the live path is never entered.

use std::sync::Arc;

use netsis_panel::client::{ApiClient, FaturaBrowser, FisForm};
use netsis_panel::domain::filter::FaturaFilter;
use netsis_panel::transport;
use netsis_panel::{DataService, RunMode};

async fn spawn_static_server() -> Result<(Arc<DataService>, String), Box<dyn std::error::Error>> {
    let data_service = Arc::new(DataService::with_pools(None, None, RunMode::Static));
    let app_state = transport::http::AppState { data_service: data_service.clone() };
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts with a running API server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok((data_service, format!("http://127.0.0.1:{}", port)))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn static_mode_serves_samples_without_touching_live_path(
) -> Result<(), Box<dyn std::error::Error>> {
    let (data_service, base_url) = spawn_static_server().await?;
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/api/health", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(health["status"], "OK");

    let db_test = client
        .get(format!("{}/api/db-test", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(db_test["success"], true);
    assert_eq!(db_test["mode"], "test");

    let faturalar = client
        .get(format!("{}/api/faturalar", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(faturalar["success"], true);
    assert_eq!(faturalar["mode"], "test");
    assert_eq!(faturalar["count"], 3);
    // The mis-encoded sample name is normalized on the way out.
    assert_eq!(
        faturalar["data"][0]["CARI_ISIM"],
        "YENİ ÖZGÜVEN MADENCİLİK İNŞAAT SAN.TİC.LTD.ŞTİ."
    );

    // No params: the endpoint defaults (code + July 2025) kick in and are
    // echoed back; only the two July lines survive, in order.
    let filtreli = client
        .get(format!("{}/api/faturalar/filtreli", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(filtreli["mode"], "test");
    assert_eq!(filtreli["count"], 2);
    assert_eq!(filtreli["filters"]["carikod"], "320 01 004");
    assert_eq!(filtreli["filters"]["baslangicTarih"], "2025-07-01");
    assert_eq!(filtreli["filters"]["bitisTarih"], "2025-07-31");
    assert_eq!(filtreli["data"][0]["FATIRS_NO"], "FAT001");
    assert_eq!(filtreli["data"][1]["FATIRS_NO"], "FAT002");

    let fis_no = client
        .get(format!("{}/api/latest-fis-no", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(fis_no["success"], true);
    assert_eq!(fis_no["latestFisNo"], 1000);
    assert_eq!(fis_no["nextFisNo"], 1001);
    assert_eq!(fis_no["mode"], "test");

    let tipleri = client
        .get(format!("{}/api/malzeme-fis-tipleri", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(tipleri["success"], true);
    assert_eq!(tipleri["count"], 4);
    assert_eq!(tipleri["data"][0]["MalzemeFisTipi"], "Satış Faturası");

    let depolar = client
        .get(format!("{}/api/depolar", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(depolar["success"], true);
    assert_eq!(depolar["count"], 3);
    assert_eq!(depolar["data"][0]["DepoAdi"], "ANA DEPO");

    let siparisler = client
        .get(format!("{}/api/siparisler", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(siparisler["success"], true);
    assert_eq!(siparisler["mode"], "test");
    assert_eq!(siparisler["count"], 3);
    assert_eq!(siparisler["data"][1]["MalzemeAdi"], "PVC İzolasyon Granülü");

    // The spy: nothing above may have entered the live query path.
    assert_eq!(data_service.live_attempts(), 0);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn browser_filters_locally_after_one_load() -> Result<(), Box<dyn std::error::Error>> {
    let (data_service, base_url) = spawn_static_server().await?;

    let mut browser = FaturaBrowser::new(ApiClient::new(base_url));
    browser.load().await;

    assert!(browser.error().is_none());
    assert_eq!(browser.all_records().len(), 3);
    assert_eq!(browser.visible_records().len(), 3);

    let live_attempts_after_load = data_service.live_attempts();

    // Two lines share the code and fall in July; the third shares the code
    // but is dated outside the range.
    browser.apply_filter(FaturaFilter::new("320 01 004", "2025-07-01", "2025-07-31"));
    let nos: Vec<&str> =
        browser.visible_records().iter().map(|r| r.fatirs_no.as_str()).collect();
    assert_eq!(nos, ["FAT001", "FAT002"]);

    // Everything visible is a loaded record.
    for record in browser.visible_records() {
        assert!(browser.all_records().contains(record));
    }

    browser.reset_filter();
    assert_eq!(browser.visible_records().len(), browser.all_records().len());

    // Filtering triggered no further fetches of any kind.
    assert_eq!(data_service.live_attempts(), live_attempts_after_load);

    let stats = browser.stats();
    assert_eq!(stats.record_count, 3);
    assert_eq!(stats.distinct_fatura_count, 3);
    assert!((stats.total_quantity - 23.0).abs() < f64::EPSILON);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn siparis_search_is_local_and_case_insensitive(
) -> Result<(), Box<dyn std::error::Error>> {
    let (_data_service, base_url) = spawn_static_server().await?;

    let mut browser = FaturaBrowser::new(ApiClient::new(base_url));
    browser.load_siparisler().await;
    assert_eq!(browser.siparisler().len(), 3);

    let hits = browser.search_siparisler("galvaniz");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["SiparisNo"], "SIP-2025-0055");

    let hits = browser.search_siparisler("sip-2025-0041");
    assert_eq!(hits.len(), 2);

    // Empty search term keeps everything.
    assert_eq!(browser.search_siparisler("").len(), 3);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fis_form_composes_draft_from_selection() -> Result<(), Box<dyn std::error::Error>> {
    let (_data_service, base_url) = spawn_static_server().await?;

    let mut browser = FaturaBrowser::new(ApiClient::new(base_url.clone()));
    browser.load().await;
    let selected = browser.all_records()[1].clone();

    let api = ApiClient::new(base_url);
    let mut form = FisForm::open_for(&api, &selected).await;

    assert!(form.is_open());
    let fallbacks = form.fallbacks();
    assert!(!fallbacks.fis_no && !fallbacks.fis_tipleri && !fallbacks.depolar);

    let draft = form.draft();
    assert_eq!(draft.fis_no, "1001");
    assert_eq!(draft.fatura_no, "FAT002");
    assert_eq!(draft.tipi, "Satış Faturası");
    assert_eq!(draft.tarih, "2025-07-20");
    assert_eq!(draft.tedarikci_kodu, "320 01 004");
    assert_eq!(draft.doviz, "TRY");
    assert!(!draft.mte_yazdirma);
    assert!((draft.kur - 1.0).abs() < f64::EPSILON);
    assert_eq!(draft.vade, 30);
    assert_eq!(draft.depo, "ANA DEPO");

    assert_eq!(form.fis_tipleri().len(), 4);
    assert_eq!(form.depolar().len(), 3);

    // Submit simulates the round trip and closes; nothing is persisted.
    form.submit().await;
    assert!(!form.is_open());
    assert!(!form.is_saving());

    Ok(())
}
