//! Fiş draft composition for a selected invoice line.
//!
//! Opening the form fetches the fiş type list, the warehouse list and the
//! next fiş number independently; any of the three failing falls back to its
//! own hard-coded default without blocking the others. Submitting only
//! simulates the save round trip: the write endpoint does not exist upstream
//! yet, and this flow must not pretend otherwise.

use std::time::Duration;

use crate::client::api::{parse_list, ApiClient};
use crate::domain::model::{Depo, FaturaRecord, FisDraft, MalzemeFisTipi};
use crate::domain::sample::{sample_depolar, sample_fis_tipleri};

pub const DEFAULT_FIS_TIPI: &str = "Satış Faturası";
pub const DEFAULT_DOVIZ: &str = "TRY";
pub const DEFAULT_DEPO: &str = "ANA DEPO";
pub const DEFAULT_VADE_GUN: i32 = 30;

/// Which of the three reference fetches fell back to their built-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FisFormFallbacks {
    pub fis_no: bool,
    pub fis_tipleri: bool,
    pub depolar: bool,
}

pub struct FisForm {
    draft: FisDraft,
    fis_tipleri: Vec<MalzemeFisTipi>,
    depolar: Vec<Depo>,
    fallbacks: FisFormFallbacks,
    open: bool,
    saving: bool,
}

impl FisForm {
    /// Opens the form for a selected invoice line, composing the draft from
    /// the record and the three independently-fetched reference datasets.
    pub async fn open_for(api: &ApiClient, fatura: &FaturaRecord) -> Self {
        let (fis_no_resp, tipleri_resp, depolar_resp) =
            tokio::join!(api.latest_fis_no(), api.malzeme_fis_tipleri(), api.depolar());

        let mut fallbacks = FisFormFallbacks::default();

        let fis_no = match fis_no_resp {
            Ok(resp) if resp.success => resp.next_fis_no.unwrap_or(1).to_string(),
            Ok(resp) => {
                println!(
                    "> Fiş number unavailable, defaulting to 1 ({})",
                    resp.message.as_deref().unwrap_or("no message")
                );
                fallbacks.fis_no = true;
                "1".to_string()
            }
            Err(e) => {
                eprintln!("> Fiş number fetch failed: {}", e);
                fallbacks.fis_no = true;
                "1".to_string()
            }
        };

        let fis_tipleri = match tipleri_resp {
            Ok(envelope) if envelope.success => {
                match parse_list::<MalzemeFisTipi>(envelope.data) {
                    Ok(list) if !list.is_empty() => list,
                    _ => {
                        fallbacks.fis_tipleri = true;
                        sample_fis_tipleri()
                    }
                }
            }
            Ok(envelope) => {
                println!(
                    "> Fiş types unavailable, using defaults ({})",
                    envelope.message.as_deref().unwrap_or("no message")
                );
                fallbacks.fis_tipleri = true;
                sample_fis_tipleri()
            }
            Err(e) => {
                eprintln!("> Fiş type fetch failed: {}", e);
                fallbacks.fis_tipleri = true;
                sample_fis_tipleri()
            }
        };

        let depolar = match depolar_resp {
            Ok(envelope) if envelope.success => match parse_list::<Depo>(envelope.data) {
                Ok(list) if !list.is_empty() => list,
                _ => {
                    fallbacks.depolar = true;
                    sample_depolar()
                }
            },
            Ok(envelope) => {
                println!(
                    "> Depo list unavailable, using defaults ({})",
                    envelope.message.as_deref().unwrap_or("no message")
                );
                fallbacks.depolar = true;
                sample_depolar()
            }
            Err(e) => {
                eprintln!("> Depo fetch failed: {}", e);
                fallbacks.depolar = true;
                sample_depolar()
            }
        };

        let draft = FisDraft {
            fis_no,
            fatura_no: fatura.fatirs_no.clone(),
            tipi: DEFAULT_FIS_TIPI.to_string(),
            tarih: fatura.tarih.clone(),
            tedarikci_kodu: fatura.carikod.clone(),
            doviz: DEFAULT_DOVIZ.to_string(),
            mte_yazdirma: false,
            kur: 1.0,
            vade: DEFAULT_VADE_GUN,
            depo: DEFAULT_DEPO.to_string(),
        };

        Self { draft, fis_tipleri, depolar, fallbacks, open: true, saving: false }
    }

    /// Simulated save: waits out the latency a real write would take, then
    /// closes the form. Nothing is persisted.
    pub async fn submit(&mut self) {
        self.saving = true;
        tokio::time::sleep(Duration::from_secs(1)).await;
        self.saving = false;
        self.open = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn draft(&self) -> &FisDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FisDraft {
        &mut self.draft
    }

    pub fn fis_tipleri(&self) -> &[MalzemeFisTipi] {
        &self.fis_tipleri
    }

    pub fn depolar(&self) -> &[Depo] {
        &self.depolar
    }

    pub fn fallbacks(&self) -> FisFormFallbacks {
        self.fallbacks
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}
