//! Invoice filter predicate properties against the built-in sample set
//! (three lines for "320 01 004": 2025-07-15, 2025-07-20 and 2025-08-05).

use netsis_panel::domain::filter::{apply, matches, FaturaFilter};
use netsis_panel::domain::sample::sample_faturalar;

#[test]
fn empty_filter_keeps_everything() {
    let records = sample_faturalar();
    let visible = apply(&records, &FaturaFilter::default());
    assert_eq!(visible.len(), records.len());
}

#[test]
fn filtered_subset_is_always_contained_in_the_input() {
    let records = sample_faturalar();
    let filters = [
        FaturaFilter::default(),
        FaturaFilter::new("320 01 004", "", ""),
        FaturaFilter::new("", "2025-07-01", "2025-07-31"),
        FaturaFilter::new("999 99 999", "2025-01-01", "2025-12-31"),
    ];

    for filter in filters {
        for visible in apply(&records, &filter) {
            assert!(records.contains(visible));
        }
    }
}

#[test]
fn customer_code_is_exact_match() {
    let records = sample_faturalar();

    let visible = apply(&records, &FaturaFilter::new("320 01 004", "", ""));
    assert_eq!(visible.len(), 3);

    // Prefix of a real code must not match.
    let visible = apply(&records, &FaturaFilter::new("320 01", "", ""));
    assert!(visible.is_empty());
}

#[test]
fn date_range_is_inclusive_at_both_bounds() {
    let records = sample_faturalar();

    // Both bounds land exactly on record dates.
    let visible = apply(&records, &FaturaFilter::new("", "2025-07-15", "2025-07-20"));
    let nos: Vec<&str> = visible.iter().map(|r| r.fatirs_no.as_str()).collect();
    assert_eq!(nos, ["FAT001", "FAT002"]);

    // Degenerate single-day range still matches.
    let visible = apply(&records, &FaturaFilter::new("", "2025-07-20", "2025-07-20"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].fatirs_no, "FAT002");
}

#[test]
fn one_empty_bound_disables_the_date_condition() {
    let records = sample_faturalar();

    let visible = apply(&records, &FaturaFilter::new("", "2025-07-01", ""));
    assert_eq!(visible.len(), records.len());

    let visible = apply(&records, &FaturaFilter::new("", "", "2025-07-31"));
    assert_eq!(visible.len(), records.len());
}

#[test]
fn both_conditions_are_anded() {
    let records = sample_faturalar();

    // Code matches all three, the range only the two July lines.
    let filter = FaturaFilter::new("320 01 004", "2025-07-01", "2025-07-31");
    let nos: Vec<&str> = apply(&records, &filter).iter().map(|r| r.fatirs_no.as_str()).collect();
    assert_eq!(nos, ["FAT001", "FAT002"]);

    // Range matches but the code does not.
    let filter = FaturaFilter::new("999", "2025-07-01", "2025-07-31");
    assert!(apply(&records, &filter).is_empty());
}

#[test]
fn unparseable_bounds_never_match() {
    let records = sample_faturalar();
    let filter = FaturaFilter::new("", "not-a-date", "2025-07-31");
    assert!(apply(&records, &filter).is_empty());
    assert!(!matches(&records[0], &filter));
}

#[test]
fn timestamps_compare_as_calendar_dates() {
    let mut records = sample_faturalar();
    records[0].tarih = "2025-07-15T13:45:00Z".to_string();

    let filter = FaturaFilter::new("", "2025-07-15", "2025-07-15");
    let visible = apply(&records, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].fatirs_no, "FAT001");
}

#[test]
fn defaults_fill_only_empty_fields() {
    let filter = FaturaFilter::new("", "2025-06-01", "").with_defaults();
    assert_eq!(filter.carikod, "320 01 004");
    assert_eq!(filter.baslangic_tarih, "2025-06-01");
    assert_eq!(filter.bitis_tarih, "2025-07-31");
}
