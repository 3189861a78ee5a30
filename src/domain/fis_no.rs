//! Next fiş number computation.

/// Result of scanning the existing fiş numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FisNumbers {
    pub latest: i64,
    pub next: i64,
}

/// Computes the latest and next fiş number from a set of existing reference
/// numbers.
///
/// Upstream fiş numbers are free-form strings; only those that parse as plain
/// integers participate in the comparison (strict parsing: `"10a"` and blank
/// strings are silently skipped, they are not errors). With no numeric
/// candidates the latest is 0 and the next is 1.
pub fn compute_next<I, S>(existing: I) -> FisNumbers
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let latest = existing
        .into_iter()
        .filter_map(|no| no.as_ref().trim().parse::<i64>().ok())
        .max()
        .unwrap_or(0);

    FisNumbers { latest, next: latest + 1 }
}
