//! Static sample datasets.
//!
//! These are the previously-known-good rows served in static mode and on any
//! live-query failure. The invoice set intentionally keeps one name in its
//! raw mis-encoded form; the normalizer fixes it on the way out exactly as it
//! would a live row.

use serde_json::{json, Value as JsonValue};

use crate::domain::model::{Depo, FaturaRecord, MalzemeFisTipi};

/// Latest fiş number reported in static mode.
pub const STATIC_LATEST_FIS_NO: i64 = 1000;

pub fn sample_faturalar() -> Vec<FaturaRecord> {
    vec![
        FaturaRecord {
            carikod: "320 01 004".to_string(),
            cari_isim: "YENÝ ÖZGÜVEN MADENCÝLÝK ÝNÞAAT SAN.TÝC.LTD.ÞTÝ.".to_string(),
            fatirs_no: "FAT001".to_string(),
            stok_adi: "Test Stok".to_string(),
            stra_gcmik: 10.0,
            olcubr: "ADET".to_string(),
            tarih: "2025-07-15".to_string(),
            siparis_tarih: Some("2025-07-10".to_string()),
        },
        FaturaRecord {
            carikod: "320 01 004".to_string(),
            cari_isim: "Test Cari İsim 2".to_string(),
            fatirs_no: "FAT002".to_string(),
            stok_adi: "Test Stok 2".to_string(),
            stra_gcmik: 5.0,
            olcubr: "ADET".to_string(),
            tarih: "2025-07-20".to_string(),
            siparis_tarih: Some("2025-07-18".to_string()),
        },
        FaturaRecord {
            carikod: "320 01 004".to_string(),
            cari_isim: "Test Cari İsim 3".to_string(),
            fatirs_no: "FAT003".to_string(),
            stok_adi: "Test Stok 3".to_string(),
            stra_gcmik: 8.0,
            olcubr: "KG".to_string(),
            tarih: "2025-08-05".to_string(),
            siparis_tarih: Some("2025-08-01".to_string()),
        },
    ]
}

pub fn sample_fis_tipleri() -> Vec<MalzemeFisTipi> {
    vec![
        MalzemeFisTipi { id: 1, name: "Satış Faturası".to_string() },
        MalzemeFisTipi { id: 2, name: "Alış Faturası".to_string() },
        MalzemeFisTipi { id: 3, name: "İade Faturası".to_string() },
        MalzemeFisTipi { id: 4, name: "Proforma Fatura".to_string() },
    ]
}

pub fn sample_depolar() -> Vec<Depo> {
    vec![
        Depo {
            adres_id: 1,
            depo_id: 1,
            adres: "Merkez Depo".to_string(),
            pasif: 0,
            ozel_kodu1: String::new(),
            ozel_kodu2: String::new(),
            ozel_kodu3: String::new(),
            depo_adi: "ANA DEPO".to_string(),
        },
        Depo {
            adres_id: 2,
            depo_id: 2,
            adres: "Yan Depo".to_string(),
            pasif: 0,
            ozel_kodu1: String::new(),
            ozel_kodu2: String::new(),
            ozel_kodu3: String::new(),
            depo_adi: "YAN DEPO".to_string(),
        },
        Depo {
            adres_id: 3,
            depo_id: 3,
            adres: "Şube Depo".to_string(),
            pasif: 0,
            ozel_kodu1: String::new(),
            ozel_kodu2: String::new(),
            ozel_kodu3: String::new(),
            depo_adi: "ŞUBE DEPO".to_string(),
        },
    ]
}

/// Purchase-order lines are an opaque pass-through dataset; the sample rows
/// only pin the columns the selection flow searches on plus a plausible rest.
pub fn sample_siparisler() -> Vec<JsonValue> {
    vec![
        json!({
            "SiparisDetayID": 501,
            "SiparisNo": "SIP-2025-0041",
            "FirmaKodu": "320 01 004",
            "FirmaAdi": "YENÝ ÖZGÜVEN MADENCÝLÝK ÝNÞAAT SAN.TÝC.LTD.ÞTÝ.",
            "MalzemeKodu": "MLZ-0007",
            "MalzemeAdi": "Bakır İletken 1.5mm",
            "Miktar": 250.0,
            "OlcuBirimi": "MT",
            "BirimFiyat": 14.75,
            "DovizKodu": "TRY",
            "KdvOrani": 20,
            "Tarih": "2025-07-08",
            "TeslimTarihi": "2025-07-22"
        }),
        json!({
            "SiparisDetayID": 502,
            "SiparisNo": "SIP-2025-0041",
            "FirmaKodu": "320 01 004",
            "FirmaAdi": "YENÝ ÖZGÜVEN MADENCÝLÝK ÝNÞAAT SAN.TÝC.LTD.ÞTÝ.",
            "MalzemeKodu": "MLZ-0012",
            "MalzemeAdi": "PVC Ýzolasyon Granülü",
            "Miktar": 40.0,
            "OlcuBirimi": "KG",
            "BirimFiyat": 96.0,
            "DovizKodu": "TRY",
            "KdvOrani": 20,
            "Tarih": "2025-07-08",
            "TeslimTarihi": "2025-07-30"
        }),
        json!({
            "SiparisDetayID": 517,
            "SiparisNo": "SIP-2025-0055",
            "FirmaKodu": "120 03 011",
            "FirmaAdi": "Demir Metal San. A.Þ.",
            "MalzemeKodu": "MLZ-0031",
            "MalzemeAdi": "Galvaniz Çelik Tel",
            "Miktar": 1200.0,
            "OlcuBirimi": "MT",
            "BirimFiyat": 6.4,
            "DovizKodu": "USD",
            "KdvOrani": 20,
            "Tarih": "2025-07-14",
            "TeslimTarihi": "2025-08-04"
        }),
    ]
}
