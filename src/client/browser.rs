//! Stateful fetch/filter layer over the invoice dataset.
//!
//! The browser fetches the full (unfiltered) invoice list once per explicit
//! user action and keeps it in memory; filtering is entirely local and never
//! re-queries the server. A reload while data is already present leaves the
//! previous rows visible until the new response lands, and the last response
//! to resolve wins.

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use crate::client::api::{parse_list, ApiClient, ClientError};
use crate::domain::filter::{self, FaturaFilter};
use crate::domain::model::{FaturaRecord, FaturaStats};
use crate::transport::http::types::DataMode;

pub struct FaturaBrowser {
    api: ApiClient,
    all_records: Vec<FaturaRecord>,
    visible_records: Vec<FaturaRecord>,
    filter: FaturaFilter,
    mode: Option<DataMode>,
    warning: Option<String>,
    error: Option<String>,
    loading: bool,
    siparisler: Vec<JsonValue>,
}

impl FaturaBrowser {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            all_records: Vec::new(),
            visible_records: Vec::new(),
            filter: FaturaFilter::default(),
            mode: None,
            warning: None,
            error: None,
            loading: false,
            siparisler: Vec::new(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetches the full invoice dataset and re-applies the active filter
    /// locally. Safe to call repeatedly; previous data stays visible on
    /// failure.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.faturalar().await {
            Ok(envelope) if envelope.success => match parse_list(envelope.data) {
                Ok(records) => {
                    self.all_records = records;
                    self.recompute_visible();
                    self.mode = Some(envelope.mode);
                    self.warning = envelope.warning;
                }
                Err(e) => {
                    self.error = Some(format!("unexpected record shape in response: {}", e));
                }
            },
            Ok(envelope) => {
                self.error = Some(
                    envelope
                        .error
                        .or(envelope.message)
                        .unwrap_or_else(|| "failed to load invoice data".to_string()),
                );
            }
            Err(ClientError::Network(e)) => {
                self.error = Some(format!(
                    "API connection could not be established ({}); is the server running?",
                    e
                ));
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Recomputes the visible subset from the in-memory records. Purely
    /// local; no network call.
    pub fn apply_filter(&mut self, filter: FaturaFilter) {
        self.filter = filter;
        self.recompute_visible();
    }

    /// Clears every filter field; equivalent to no filter at all.
    pub fn reset_filter(&mut self) {
        self.filter = FaturaFilter::default();
        self.recompute_visible();
    }

    fn recompute_visible(&mut self) {
        let visible: Vec<FaturaRecord> = filter::apply(&self.all_records, &self.filter)
            .into_iter()
            .cloned()
            .collect();
        self.visible_records = visible;
    }

    pub fn all_records(&self) -> &[FaturaRecord] {
        &self.all_records
    }

    pub fn visible_records(&self) -> &[FaturaRecord] {
        &self.visible_records
    }

    pub fn filter(&self) -> &FaturaFilter {
        &self.filter
    }

    pub fn mode(&self) -> Option<DataMode> {
        self.mode
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Aggregates over the visible subset.
    pub fn stats(&self) -> FaturaStats {
        let mut fatura_nos: HashSet<&str> = HashSet::new();
        let mut total_quantity = 0.0;
        for record in &self.visible_records {
            fatura_nos.insert(record.fatirs_no.as_str());
            total_quantity += record.stra_gcmik;
        }
        FaturaStats {
            record_count: self.visible_records.len(),
            distinct_fatura_count: fatura_nos.len(),
            total_quantity,
        }
    }

    /// Fetches the purchase-order list for the selection flow.
    pub async fn load_siparisler(&mut self) {
        match self.api.siparisler().await {
            Ok(envelope) if envelope.success => {
                self.siparisler = envelope.data.unwrap_or_default();
            }
            Ok(envelope) => {
                self.error = Some(
                    envelope
                        .error
                        .or(envelope.message)
                        .unwrap_or_else(|| "failed to load sipariş data".to_string()),
                );
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn siparisler(&self) -> &[JsonValue] {
        &self.siparisler
    }

    /// Case-insensitive substring search over the loaded orders, matching
    /// any of order number, material code, material name or company name.
    pub fn search_siparisler(&self, term: &str) -> Vec<&JsonValue> {
        const SEARCH_FIELDS: [&str; 4] = ["SiparisNo", "MalzemeKodu", "MalzemeAdi", "FirmaAdi"];

        let needle = term.to_lowercase();
        self.siparisler
            .iter()
            .filter(|siparis| {
                SEARCH_FIELDS.iter().any(|field| {
                    siparis
                        .get(*field)
                        .and_then(JsonValue::as_str)
                        .map(|v| v.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
            })
            .collect()
    }
}
