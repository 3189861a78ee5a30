//! Degraded-mode contract: a live-configured facade with no store handles
//! must serve sample data for the datasets that have one wired in, and an
//! explicit failed envelope for the reference lists that do not.

use netsis_panel::client::{ApiClient, FaturaBrowser, FisForm};
use netsis_panel::domain::filter::FaturaFilter;
use netsis_panel::domain::sample::sample_faturalar;
use netsis_panel::transport::http::types::DataMode;
use netsis_panel::{DataService, RunMode};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn faturalar_degrade_to_samples_with_warning() {
    // Live mode, but neither store came up: every request is a failed live
    // attempt.
    let service = DataService::with_pools(None, None, RunMode::Live);

    let envelope = service.faturalar().await;
    assert!(envelope.success);
    assert_eq!(envelope.mode, DataMode::Fallback);
    assert!(!envelope.warning.as_deref().unwrap_or("").is_empty());
    assert_eq!(envelope.count, Some(3));
    let data = envelope.data.unwrap();
    assert_eq!(data.len(), sample_faturalar().len());
    assert_eq!(data[0]["CARI_ISIM"], "YENİ ÖZGÜVEN MADENCİLİK İNŞAAT SAN.TİC.LTD.ŞTİ.");

    assert!(service.live_attempts() > 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn filtered_fallback_applies_the_supplied_params() {
    let service = DataService::with_pools(None, None, RunMode::Live);

    // Empty fields pick up the endpoint defaults, which match two of the
    // three sample lines.
    let envelope = service.faturalar_filtreli(&FaturaFilter::default()).await;
    assert!(envelope.success);
    assert_eq!(envelope.mode, DataMode::Fallback);
    assert_eq!(envelope.count, Some(2));
    let filters = envelope.filters.unwrap();
    assert_eq!(filters.carikod, "320 01 004");

    // A code nothing matches filters the sample set down to nothing, still
    // as a successful degraded response.
    let envelope = service
        .faturalar_filtreli(&FaturaFilter::new("999 99 999", "2025-07-01", "2025-07-31"))
        .await;
    assert!(envelope.success);
    assert_eq!(envelope.mode, DataMode::Fallback);
    assert_eq!(envelope.count, Some(0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reference_lists_fail_explicitly_without_wired_fallback() {
    let service = DataService::with_pools(None, None, RunMode::Live);

    let tipleri = service.malzeme_fis_tipleri().await;
    assert!(!tipleri.success);
    assert_eq!(tipleri.mode, DataMode::Error);
    assert!(tipleri.data.is_none());
    assert!(tipleri.message.is_some());

    let depolar = service.depolar().await;
    assert!(!depolar.success);
    assert_eq!(depolar.mode, DataMode::Error);

    let fis_no = service.latest_fis_no().await;
    assert!(!fis_no.success);
    assert!(fis_no.next_fis_no.is_none());
    assert!(fis_no.message.is_some());

    let db_test = service.db_test().await;
    assert!(!db_test.success);
    assert_eq!(db_test.mode, DataMode::Error);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn siparisler_degrade_like_faturalar() {
    let service = DataService::with_pools(None, None, RunMode::Live);

    let envelope = service.siparisler().await;
    assert!(envelope.success);
    assert_eq!(envelope.mode, DataMode::Fallback);
    assert!(!envelope.warning.as_deref().unwrap_or("").is_empty());
    assert_eq!(envelope.count, Some(3));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn static_mode_never_enters_the_live_path() {
    let service = DataService::with_pools(None, None, RunMode::Static);

    let _ = service.faturalar().await;
    let _ = service.faturalar_filtreli(&FaturaFilter::default()).await;
    let _ = service.malzeme_fis_tipleri().await;
    let _ = service.depolar().await;
    let _ = service.latest_fis_no().await;
    let _ = service.siparisler().await;
    let _ = service.db_test().await;

    assert_eq!(service.live_attempts(), 0);

    // And everything above reported test provenance.
    assert_eq!(service.faturalar().await.mode, DataMode::Test);
    assert_eq!(service.latest_fis_no().await.mode, DataMode::Test);
}

/// Binds and immediately drops a listener to get a port nothing serves.
async fn dead_base_url() -> Result<String, Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn browser_reports_connectivity_errors_distinctly(
) -> Result<(), Box<dyn std::error::Error>> {
    let mut browser = FaturaBrowser::new(ApiClient::new(dead_base_url().await?));
    browser.load().await;

    let error = browser.error().unwrap_or_default().to_string();
    assert!(error.contains("API connection could not be established"), "got: {}", error);
    assert!(browser.all_records().is_empty());
    assert!(!browser.is_loading());

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fis_form_falls_back_per_dataset_when_server_is_down(
) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::new(dead_base_url().await?);
    let fatura = sample_faturalar().remove(0);

    let form = FisForm::open_for(&api, &fatura).await;

    let fallbacks = form.fallbacks();
    assert!(fallbacks.fis_no && fallbacks.fis_tipleri && fallbacks.depolar);

    // Each dataset landed on its own hard-coded default.
    assert_eq!(form.draft().fis_no, "1");
    assert_eq!(form.fis_tipleri().len(), 4);
    assert_eq!(form.depolar().len(), 3);

    // The record-derived fields are still composed normally.
    assert_eq!(form.draft().fatura_no, "FAT001");
    assert_eq!(form.draft().tedarikci_kodu, "320 01 004");

    Ok(())
}
