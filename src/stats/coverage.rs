use crate::core::range::Range;
use crate::core::types::ValidationResult;
use crate::utils::validation::count_to_f64;

/// Number of distinct positions in `[0, length)` covered by at least one range.
///
/// Overlapping ranges are counted once. Positions at or past `length` are ignored.
#[must_use]
pub fn covered_positions(ranges: &[Range], length: u64) -> u64 {
    let mut spans: Vec<(u64, u64)> = ranges
        .iter()
        .map(|r| (r.start.min(length), r.end.min(length)))
        .filter(|(start, end)| start < end)
        .collect();
    spans.sort_unstable();

    let mut covered = 0;
    let mut reach = 0;
    for (start, end) in spans {
        let start = start.max(reach);
        if end > start {
            covered += end - start;
            reach = end;
        }
    }
    covered
}

/// Fraction of a match-list sequence covered by its ranges
#[must_use]
pub fn match_coverage(ranges: &[Range], length: u64) -> f64 {
    if length == 0 || ranges.is_empty() {
        return 0.0;
    }
    count_to_f64(covered_positions(ranges, length)) / count_to_f64(length)
}

/// All-or-nothing coverage of a validation block
#[must_use]
pub fn validation_coverage(result: Option<ValidationResult>, length: u64) -> f64 {
    if result.is_some_and(ValidationResult::is_valid) && length > 0 {
        1.0
    } else {
        0.0
    }
}
