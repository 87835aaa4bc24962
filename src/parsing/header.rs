//! Report-wide header fields and the trailing run summary.
//!
//! The simulator prints, in no guaranteed order:
//!
//! ```text
//! Pattern: ACGT
//! Datasets: 2 sequence(s)
//! Automaton Mode: DFA
//! ...
//! Runs: 1, Matches: 3, All accepted: no
//! ```
//!
//! Every line is inspected independently of block structure. Missing markers
//! leave their fields at the default.

use crate::core::report::{HeaderFields, RunSummary};
use crate::parsing::patterns::{
    DATASETS_MARKER, MODE_MARKER, PATTERN_MARKER, SUMMARY_LINE,
};
use crate::utils::validation::{first_number, parse_count};

/// Scan `text` for the header markers and the summary line.
///
/// A marker that appears more than once takes its last value.
#[must_use]
pub fn extract_header(text: &str) -> HeaderFields {
    let mut fields = HeaderFields::default();

    for line in text.lines() {
        let line = line.trim_start();
        if let Some(value) = line.strip_prefix(PATTERN_MARKER) {
            fields.pattern = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(DATASETS_MARKER) {
            let value = value.trim();
            fields.dataset_descriptor = value.to_string();
            fields.dataset_count = first_number(value).unwrap_or(0);
        } else if let Some(value) = line.strip_prefix(MODE_MARKER) {
            fields.automaton_mode = value.trim().to_string();
        }
    }

    fields.summary = extract_summary(text);
    fields
}

/// Find the first `Runs: .., Matches: .., All accepted: ..` line
#[must_use]
pub fn extract_summary(text: &str) -> RunSummary {
    text.lines()
        .find_map(|line| SUMMARY_LINE.captures(line))
        .map(|caps| RunSummary {
            runs: parse_count(&caps[1]),
            total_matches: parse_count(&caps[2]),
            all_accepted: &caps[3] == "yes",
        })
        .unwrap_or_default()
}
