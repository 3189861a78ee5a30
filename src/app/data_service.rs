//! The Data Access Facade.
//!
//! This module is the single seam between the HTTP surface and the two
//! relational stores. It is responsible for:
//! 1.  Running exactly one live query per request against the store that
//!     owns the requested dataset.
//! 2.  Degrading to the static sample data (with a `fallback` mode and a
//!     human-readable warning) whenever the live path fails.
//! 3.  Running every served row set through the legacy character fixup.
//!
//! A store whose pool cannot be built at startup is recorded as absent and
//! every later request to it takes the degraded path without a reconnect
//! attempt; the store only comes back on process restart. Fast failure was
//! chosen over per-request retry storms.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{anyhow, Context};
use serde_json::{json, Value as JsonValue};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::domain::filter::{self, FaturaFilter};
use crate::domain::fis_no::compute_next;
use crate::domain::normalize::clean_records;
use crate::domain::sample;
use crate::infra::config::{Config, StoreConfig};
use crate::transport::http::types::{
    DataMode, DbTestResponse, Envelope, FisNoResponse,
};

/// Whether the facade talks to the live stores or serves built-in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Live,
    Static,
}

const FALLBACK_WARNING: &str = "Live database unavailable, showing sample data";

const NO_NETSIS_POOL: &str = "Netsis connection pool is not available";
const NO_FIS_POOL: &str = "SenkronERP connection pool is not available";

const FATURA_SQL: &str = r#"
    SELECT row_to_json(f.*) AS record
    FROM (
        SELECT m."CARIKOD", m."CARI_ISIM", m."FATIRS_NO", k."STOK_ADI",
               k."STRA_GCMIK", k."OLCUBR", m."TARIH", m."SIPARIS_TARIH"
        FROM "TBLEFATMAS" m
        RIGHT JOIN "TBLEFATKALEM" k ON k."EFATMASINC" = m."INCKEYNO"
        WHERE m."FTIRSIP" = 2
        ORDER BY m."INCKEYNO" DESC
    ) f
"#;

const FATURA_FILTRELI_SQL: &str = r#"
    SELECT row_to_json(f.*) AS record
    FROM (
        SELECT m."CARIKOD", m."CARI_ISIM", m."FATIRS_NO", k."STOK_ADI",
               k."STRA_GCMIK", k."OLCUBR", m."TARIH", m."SIPARIS_TARIH"
        FROM "TBLEFATMAS" m
        RIGHT JOIN "TBLEFATKALEM" k ON k."EFATMASINC" = m."INCKEYNO"
        WHERE m."FTIRSIP" = 2
          AND m."CARIKOD" = $1
          AND m."TARIH" >= $2
          AND m."TARIH" <= $3
        ORDER BY m."INCKEYNO" DESC
    ) f
"#;

const FIS_TIPLERI_SQL: &str = r#"
    SELECT row_to_json(t.*) AS record
    FROM (
        SELECT "MalzemeFisTipID", "MalzemeFisTipi"
        FROM "MD_MalzemeFisTipleri"
        ORDER BY "MalzemeFisTipi"
    ) t
"#;

const DEPOLAR_SQL: &str = r#"
    SELECT row_to_json(d.*) AS record
    FROM (
        SELECT a."AdresID", a."DepoID", a."Adres", a."Pasif",
               a."OzelKodu1", a."OzelKodu2", a."OzelKodu3", dp."DepoAdi"
        FROM "MD_Adresler" a
        INNER JOIN "MD_Depolar" dp ON dp."DepoID" = a."DepoID"
        WHERE a."Pasif" = 0
        ORDER BY dp."DepoAdi", a."Adres"
    ) d
"#;

const FIS_NO_SQL: &str = r#"
    SELECT "FisNo"
    FROM "MD_MalzemeFisleri"
    WHERE "MalzemeFisTurID" = 10
      AND "FisNo" IS NOT NULL
      AND "FisNo" <> ''
"#;

const SIPARIS_SQL: &str = r#"
    SELECT row_to_json(s.*) AS record
    FROM (
        SELECT d."SiparisDetayID", m."SiparisNo", m."FirmaKodu", m."FirmaAdi",
               m."Tarih", d."MalzemeKodu", d."MalzemeAdi", d."Miktar",
               d."OlcuBirimi", d."BirimFiyat", d."DovizKodu", d."KdvOrani",
               d."TeslimTarihi"
        FROM "MD_SiparisDetaylari" d
        INNER JOIN "MD_Siparisler" m ON m."SiparisID" = d."SiparisID"
        ORDER BY m."Tarih" DESC, d."SiparisDetayID" DESC
    ) s
"#;

/// The facade over both stores. Shared immutably across requests
/// (`Arc<DataService>`); the pools synchronize internally.
pub struct DataService {
    netsis_pool: Option<PgPool>,
    fis_pool: Option<PgPool>,
    mode: RunMode,
    /// Counts entries into the live path, including attempts that fail
    /// because a pool is absent. Lets tests pin that static mode never
    /// touches live queries.
    live_attempts: AtomicU64,
}

impl DataService {
    /// Builds the facade from configuration: one pool per store, connected
    /// eagerly. Startup failure of a store is tolerated and logged; the
    /// store is simply absent afterwards. In static mode no connection is
    /// attempted at all.
    pub async fn connect(config: &Config) -> Self {
        if config.mode == RunMode::Static {
            println!("> Static mode active - using built-in sample data");
            return Self::with_pools(None, None, RunMode::Static);
        }

        let netsis_pool = connect_store(&config.netsis).await;
        let fis_pool = connect_store(&config.senkron_fis).await;

        Self::with_pools(netsis_pool, fis_pool, RunMode::Live)
    }

    /// Explicit constructor for tests and embedders: inject pools (or their
    /// absence) and the run mode directly.
    pub fn with_pools(
        netsis_pool: Option<PgPool>,
        fis_pool: Option<PgPool>,
        mode: RunMode,
    ) -> Self {
        Self { netsis_pool, fis_pool, mode, live_attempts: AtomicU64::new(0) }
    }

    /// Closes both pools. Part of the explicit shutdown step.
    pub async fn close(&self) {
        if let Some(pool) = &self.netsis_pool {
            pool.close().await;
            println!("> Netsis store connection closed");
        }
        if let Some(pool) = &self.fis_pool {
            pool.close().await;
            println!("> SenkronERP store connection closed");
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Number of live-path entries since construction.
    pub fn live_attempts(&self) -> u64 {
        self.live_attempts.load(Ordering::Relaxed)
    }

    fn note_live_attempt(&self) {
        self.live_attempts.fetch_add(1, Ordering::Relaxed);
    }

    /// Full invoice line list.
    pub async fn faturalar(&self) -> Envelope {
        if self.mode == RunMode::Static {
            return Envelope::test(clean_records(sample_fatura_values()));
        }

        self.note_live_attempt();
        let result = match &self.netsis_pool {
            Some(pool) => fetch_records(pool, FATURA_SQL).await,
            None => Err(anyhow!(NO_NETSIS_POOL)),
        };

        match result {
            Ok(records) => Envelope::database(clean_records(records)),
            Err(e) => {
                eprintln!("> Fatura query failed: {}", e);
                println!("> Serving sample fatura data instead");
                Envelope::fallback(clean_records(sample_fatura_values()), FALLBACK_WARNING)
            }
        }
    }

    /// Invoice line list constrained by customer code and date range.
    ///
    /// Empty filter fields are replaced by the endpoint defaults, and the
    /// constraint is bound into the live query itself; the degraded paths
    /// apply the same predicate to the sample set locally.
    pub async fn faturalar_filtreli(&self, filter: &FaturaFilter) -> Envelope {
        let filter = filter.clone().with_defaults();

        if self.mode == RunMode::Static {
            let data = clean_records(filtered_sample_fatura_values(&filter));
            return Envelope::test(data).with_filters(filter);
        }

        self.note_live_attempt();
        let result = match &self.netsis_pool {
            Some(pool) => fetch_faturalar_filtreli(pool, &filter).await,
            None => Err(anyhow!(NO_NETSIS_POOL)),
        };

        match result {
            Ok(records) => Envelope::database(clean_records(records)).with_filters(filter),
            Err(e) => {
                eprintln!("> Filtered fatura query failed: {}", e);
                println!("> Serving sample fatura data instead (filtered)");
                let data = clean_records(filtered_sample_fatura_values(&filter));
                Envelope::fallback(data, FALLBACK_WARNING).with_filters(filter)
            }
        }
    }

    /// Fiş type reference list. No static fallback outside static mode; the
    /// form layer owns its own defaults.
    pub async fn malzeme_fis_tipleri(&self) -> Envelope {
        if self.mode == RunMode::Static {
            return Envelope::test(sample_values(sample::sample_fis_tipleri()));
        }

        self.note_live_attempt();
        let Some(pool) = &self.fis_pool else {
            return Envelope::failure(NO_FIS_POOL, None);
        };

        match fetch_records(pool, FIS_TIPLERI_SQL).await {
            Ok(records) => Envelope::database(clean_records(records)),
            Err(e) => {
                eprintln!("> Fiş tipi query failed: {}", e);
                Envelope::failure("Failed to load malzeme fiş tipleri", Some(e.to_string()))
            }
        }
    }

    /// Warehouse reference list. Same failure contract as the fiş types.
    pub async fn depolar(&self) -> Envelope {
        if self.mode == RunMode::Static {
            return Envelope::test(sample_values(sample::sample_depolar()));
        }

        self.note_live_attempt();
        let Some(pool) = &self.fis_pool else {
            return Envelope::failure(NO_FIS_POOL, None);
        };

        match fetch_records(pool, DEPOLAR_SQL).await {
            Ok(records) => Envelope::database(clean_records(records)),
            Err(e) => {
                eprintln!("> Depo query failed: {}", e);
                Envelope::failure("Failed to load depo list", Some(e.to_string()))
            }
        }
    }

    /// Latest and next fiş number over the existing material receipts.
    pub async fn latest_fis_no(&self) -> FisNoResponse {
        if self.mode == RunMode::Static {
            return FisNoResponse::ok(
                sample::STATIC_LATEST_FIS_NO,
                sample::STATIC_LATEST_FIS_NO + 1,
                DataMode::Test,
            );
        }

        self.note_live_attempt();
        let Some(pool) = &self.fis_pool else {
            return FisNoResponse::failure(NO_FIS_POOL, None);
        };

        match sqlx::query(FIS_NO_SQL).fetch_all(pool).await {
            Ok(rows) => {
                let numbers = compute_next(
                    rows.iter().filter_map(|r| r.try_get::<String, _>("FisNo").ok()),
                );
                FisNoResponse::ok(numbers.latest, numbers.next, DataMode::Database)
            }
            Err(e) => {
                eprintln!("> Fiş number query failed: {}", e);
                FisNoResponse::failure("Failed to load fiş number", Some(e.to_string()))
            }
        }
    }

    /// Purchase-order line list, passed through opaquely (only the string
    /// encoding is fixed).
    pub async fn siparisler(&self) -> Envelope {
        if self.mode == RunMode::Static {
            return Envelope::test(clean_records(sample::sample_siparisler()));
        }

        self.note_live_attempt();
        let result = match &self.fis_pool {
            Some(pool) => fetch_records(pool, SIPARIS_SQL).await,
            None => Err(anyhow!(NO_FIS_POOL)),
        };

        match result {
            Ok(records) => Envelope::database(clean_records(records)),
            Err(e) => {
                eprintln!("> Sipariş query failed: {}", e);
                println!("> Serving sample sipariş data instead");
                Envelope::fallback(clean_records(sample::sample_siparisler()), FALLBACK_WARNING)
            }
        }
    }

    /// Connectivity probe against the Netsis store (`SELECT 1`).
    pub async fn db_test(&self) -> DbTestResponse {
        if self.mode == RunMode::Static {
            return DbTestResponse {
                success: true,
                message: "Static mode active - live connection not tested".to_string(),
                mode: DataMode::Test,
                test_result: None,
                error: None,
            };
        }

        self.note_live_attempt();
        let Some(pool) = &self.netsis_pool else {
            return DbTestResponse {
                success: false,
                message: NO_NETSIS_POOL.to_string(),
                mode: DataMode::Error,
                test_result: None,
                error: None,
            };
        };

        match sqlx::query("SELECT 1 AS test").fetch_one(pool).await {
            Ok(row) => {
                let test: i32 = row.try_get("test").unwrap_or_default();
                DbTestResponse {
                    success: true,
                    message: "Database connection successful".to_string(),
                    mode: DataMode::Database,
                    test_result: Some(json!({ "test": test })),
                    error: None,
                }
            }
            Err(e) => DbTestResponse {
                success: false,
                message: "Database connection failed".to_string(),
                mode: DataMode::Error,
                test_result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

async fn connect_store(store: &StoreConfig) -> Option<PgPool> {
    let result = PgPoolOptions::new()
        .max_connections(store.max_connections)
        .acquire_timeout(store.connect_timeout)
        .connect_with(store.connect_options())
        .await;

    match result {
        Ok(pool) => {
            println!("> Connected to {} store ({})", store.label, store.summary());
            Some(pool)
        }
        Err(e) => {
            eprintln!("> {} store connection failed: {}", store.label, e);
            println!("> Requests against {} will degrade until restart", store.label);
            None
        }
    }
}

/// Runs a `row_to_json` query and collects the `record` column.
async fn fetch_records(pool: &PgPool, sql: &str) -> anyhow::Result<Vec<JsonValue>> {
    let rows = sqlx::query(sql).fetch_all(pool).await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let record: JsonValue = row.try_get("record")?;
        records.push(record);
    }
    Ok(records)
}

async fn fetch_faturalar_filtreli(
    pool: &PgPool,
    filter: &FaturaFilter,
) -> anyhow::Result<Vec<JsonValue>> {
    let (start, end) = filter
        .date_range()
        .context("filter dates must be YYYY-MM-DD calendar dates")?;

    let rows = sqlx::query(FATURA_FILTRELI_SQL)
        .bind(&filter.carikod)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let record: JsonValue = row.try_get("record")?;
        records.push(record);
    }
    Ok(records)
}

fn sample_values<T: serde::Serialize>(items: Vec<T>) -> Vec<JsonValue> {
    items
        .into_iter()
        .map(|item| serde_json::to_value(item).unwrap_or_default())
        .collect()
}

fn sample_fatura_values() -> Vec<JsonValue> {
    sample_values(sample::sample_faturalar())
}

fn filtered_sample_fatura_values(filter: &FaturaFilter) -> Vec<JsonValue> {
    let records = sample::sample_faturalar();
    filter::apply(&records, filter)
        .into_iter()
        .map(|record| serde_json::to_value(record).unwrap_or_default())
        .collect()
}
