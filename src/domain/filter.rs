//! Invoice filter: wire parameters and the shared predicate.
//!
//! The same predicate backs both the facade's degraded path (filtering the
//! sample set) and the client layer's local filtering, so the two can never
//! disagree on what "matches" means.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::FaturaRecord;

pub const DEFAULT_CARIKOD: &str = "320 01 004";
pub const DEFAULT_BASLANGIC_TARIH: &str = "2025-07-01";
pub const DEFAULT_BITIS_TARIH: &str = "2025-07-31";

/// Filter parameters as they appear on the query string. Empty strings mean
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaturaFilter {
    #[serde(default)]
    pub carikod: String,
    #[serde(default)]
    pub baslangic_tarih: String,
    #[serde(default)]
    pub bitis_tarih: String,
}

impl FaturaFilter {
    pub fn new(
        carikod: impl Into<String>,
        baslangic_tarih: impl Into<String>,
        bitis_tarih: impl Into<String>,
    ) -> Self {
        Self {
            carikod: carikod.into(),
            baslangic_tarih: baslangic_tarih.into(),
            bitis_tarih: bitis_tarih.into(),
        }
    }

    /// Substitutes the endpoint defaults for any field left empty, matching
    /// the defaults the filtered endpoint has always advertised.
    pub fn with_defaults(mut self) -> Self {
        if self.carikod.is_empty() {
            self.carikod = DEFAULT_CARIKOD.to_string();
        }
        if self.baslangic_tarih.is_empty() {
            self.baslangic_tarih = DEFAULT_BASLANGIC_TARIH.to_string();
        }
        if self.bitis_tarih.is_empty() {
            self.bitis_tarih = DEFAULT_BITIS_TARIH.to_string();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.carikod.is_empty() && self.baslangic_tarih.is_empty() && self.bitis_tarih.is_empty()
    }

    /// Both date bounds, when both are present and parseable.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.baslangic_tarih.is_empty() || self.bitis_tarih.is_empty() {
            return None;
        }
        Some((
            parse_calendar_date(&self.baslangic_tarih)?,
            parse_calendar_date(&self.bitis_tarih)?,
        ))
    }
}

/// Parses the calendar-date prefix of a wire date string, ignoring any
/// time-of-day suffix (`2025-07-15` and `2025-07-15T00:00:00Z` both parse to
/// the same day).
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Whether a record is visible under `filter`.
///
/// Customer code: empty means no constraint, otherwise exact equality.
/// Dates: either bound empty means no constraint, otherwise the record's
/// invoice date must fall within `[start, end]` inclusive. A bound or record
/// date that does not parse as a calendar date never matches. A record is
/// visible iff both conditions hold.
pub fn matches(record: &FaturaRecord, filter: &FaturaFilter) -> bool {
    let carikod_ok = filter.carikod.is_empty() || record.carikod == filter.carikod;

    let tarih_ok = if filter.baslangic_tarih.is_empty() || filter.bitis_tarih.is_empty() {
        true
    } else {
        match (filter.date_range(), parse_calendar_date(&record.tarih)) {
            (Some((start, end)), Some(tarih)) => start <= tarih && tarih <= end,
            _ => false,
        }
    };

    carikod_ok && tarih_ok
}

/// Applies [`matches`] over a slice, preserving order.
pub fn apply<'a>(records: &'a [FaturaRecord], filter: &FaturaFilter) -> Vec<&'a FaturaRecord> {
    records.iter().filter(|r| matches(r, filter)).collect()
}
