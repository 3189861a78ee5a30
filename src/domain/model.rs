//! Record types crossing the HTTP surface.
//!
//! Wire field names follow the upstream column names (uppercase Netsis
//! columns for invoice lines, PascalCase SenkronERP columns for the fiş
//! reference data), so a row fetched live and a row from the sample sets
//! serialize identically.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One invoice line, as produced by the fatura master/detail join.
///
/// Immutable snapshot of a query result; dates travel as `YYYY-MM-DD`
/// strings on the wire (the filter layer compares them as calendar dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FaturaRecord {
    pub carikod: String,
    pub cari_isim: String,
    pub fatirs_no: String,
    pub stok_adi: String,
    pub stra_gcmik: f64,
    pub olcubr: String,
    pub tarih: String,
    /// Absent when the invoice line has no originating order.
    #[serde(default)]
    pub siparis_tarih: Option<String>,
}

/// Fiş type reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MalzemeFisTipi {
    #[serde(rename = "MalzemeFisTipID")]
    pub id: i32,
    #[serde(rename = "MalzemeFisTipi")]
    pub name: String,
}

/// Warehouse address record (active rows of the depo/address join).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Depo {
    #[serde(rename = "AdresID")]
    pub adres_id: i32,
    #[serde(rename = "DepoID")]
    pub depo_id: i32,
    pub adres: String,
    pub pasif: i32,
    pub ozel_kodu1: String,
    pub ozel_kodu2: String,
    pub ozel_kodu3: String,
    pub depo_adi: String,
}

/// Draft fiş (receipt) document composed from a selected invoice line.
///
/// Submitting a draft does not persist anything; the flow deliberately stops
/// at composition until the write endpoint exists upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FisDraft {
    pub fis_no: String,
    pub fatura_no: String,
    pub tipi: String,
    pub tarih: String,
    pub tedarikci_kodu: String,
    pub doviz: String,
    pub mte_yazdirma: bool,
    pub kur: f64,
    pub vade: i32,
    pub depo: String,
}

/// Summary aggregates over the currently visible invoice lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaturaStats {
    pub record_count: usize,
    pub distinct_fatura_count: usize,
    pub total_quantity: f64,
}
