//! Next-fiş-number computation over free-form reference numbers.

use netsis_panel::domain::fis_no::compute_next;

#[test]
fn skips_non_numeric_and_blank_identifiers() {
    // "10a" does not parse as a plain integer and is excluded.
    let numbers = compute_next(["10", "abc", "", "7", "10a"]);
    assert_eq!(numbers.latest, 10);
    assert_eq!(numbers.next, 11);
}

#[test]
fn empty_input_yields_zero_and_one() {
    let numbers = compute_next(Vec::<String>::new());
    assert_eq!(numbers.latest, 0);
    assert_eq!(numbers.next, 1);
}

#[test]
fn all_non_numeric_yields_zero_and_one() {
    let numbers = compute_next(["FIS-A", "x", " "]);
    assert_eq!(numbers.latest, 0);
    assert_eq!(numbers.next, 1);
}

#[test]
fn tolerates_surrounding_whitespace() {
    let numbers = compute_next([" 25 ", "3"]);
    assert_eq!(numbers.latest, 25);
    assert_eq!(numbers.next, 26);
}
