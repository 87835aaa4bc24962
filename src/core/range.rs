use serde::Serialize;

use crate::parsing::patterns::RANGE_TOKEN;

/// A half-open match interval `[start, end)` reported by the simulator.
///
/// `length` is always `end - start`, saturating at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    /// The token as it appeared in the report, e.g. `[0,3)`
    #[serde(rename = "range")]
    pub raw_text: String,
    pub start: u64,
    pub end: u64,
    pub length: u64,
}

impl Range {
    #[must_use]
    pub fn new(raw_text: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            raw_text: raw_text.into(),
            start,
            end,
            length: end.saturating_sub(start),
        }
    }

    /// The zero range used when a token cannot be read
    #[must_use]
    pub fn degenerate(raw_text: impl Into<String>) -> Self {
        Self::new(raw_text, 0, 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

/// Parse a bracketed half-open range token such as `[12,20)`.
///
/// Never fails: anything other than `[<digits>,<digits>)` (including numbers
/// too large to represent) yields the degenerate zero range carrying the
/// original token.
///
/// # Examples
///
/// ```
/// use automata_report::core::range::parse_range;
///
/// let range = parse_range("[0,3)");
/// assert_eq!((range.start, range.end, range.length), (0, 3, 3));
///
/// let bad = parse_range("garbage");
/// assert_eq!((bad.start, bad.end, bad.length), (0, 0, 0));
/// assert_eq!(bad.raw_text, "garbage");
/// ```
#[must_use]
pub fn parse_range(token: &str) -> Range {
    let Some(caps) = RANGE_TOKEN.captures(token) else {
        return Range::degenerate(token);
    };

    match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
        (Ok(start), Ok(end)) => Range::new(token, start, end),
        _ => Range::degenerate(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_range() {
        let range = parse_range("[0,3)");
        assert_eq!(range.raw_text, "[0,3)");
        assert_eq!(range.start, 0);
        assert_eq!(range.end, 3);
        assert_eq!(range.length, 3);
    }

    #[test]
    fn test_parse_garbage_is_degenerate() {
        let range = parse_range("garbage");
        assert_eq!(range, Range::degenerate("garbage"));
        assert!(range.is_empty());
    }

    #[test]
    fn test_closed_bracket_is_rejected() {
        // Only half-open tokens are understood
        let range = parse_range("[2,5]");
        assert_eq!(range.raw_text, "[2,5]");
        assert_eq!(range.length, 0);
        assert_eq!(range.start, 0);
    }

    #[test]
    fn test_reversed_range_has_zero_length() {
        let range = parse_range("[7,4)");
        assert_eq!(range.start, 7);
        assert_eq!(range.end, 4);
        assert_eq!(range.length, 0);
    }

    #[test]
    fn test_overflowing_numbers_are_degenerate() {
        let token = "[0,99999999999999999999999)";
        assert_eq!(parse_range(token), Range::degenerate(token));
    }

    #[test]
    fn test_whitespace_and_signs_are_rejected() {
        assert_eq!(parse_range("[ 1,2)").length, 0);
        assert_eq!(parse_range("[-1,2)").length, 0);
        assert_eq!(parse_range("[1,2) ").length, 0);
    }

    #[test]
    fn test_display_round_trips_token_shape() {
        assert_eq!(parse_range("[10,20)").to_string(), "[10,20)");
    }
}
