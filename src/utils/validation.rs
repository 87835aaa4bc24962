//! Centralized limits and numeric helpers.

use crate::parsing::patterns::DIGIT_RUN;

/// Maximum size of captured simulator output accepted from a file or stdin
pub const MAX_REPORT_BYTES: u64 = 64 * 1024 * 1024;

/// Parse an unsigned counter, falling back to 0 on overflow or junk.
///
/// # Examples
///
/// ```
/// use automata_report::utils::validation::parse_count;
///
/// assert_eq!(parse_count("42"), 42);
/// assert_eq!(parse_count("4x"), 0);
/// ```
#[must_use]
pub fn parse_count(digits: &str) -> u64 {
    digits.parse().unwrap_or(0)
}

/// The first run of ASCII digits in `value`, if any fits in a u64
#[must_use]
pub fn first_number(value: &str) -> Option<u64> {
    DIGIT_RUN
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
}

/// Convert a count to f64 with explicit precision loss allowance
#[inline]
#[must_use]
pub fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
