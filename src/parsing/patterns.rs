//! Compiled line grammars for the simulator report.
//!
//! Literal tokens are case-sensitive. Line-level patterns are matched against
//! lines that have already been trimmed unless noted otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single range token, anchored: `[<digits>,<digits>)`
pub(crate) static RANGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(\d+),(\d+)\)$").unwrap());

/// Range tokens embedded anywhere in a `Matches:` line
pub(crate) static RANGE_TOKEN_SEARCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+,\d+\)").unwrap());

/// `Sequence #<n> (len=<n>)`
pub(crate) static BLOCK_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Sequence #(\d+) \(len=(\d+)\)").unwrap());

/// `Matches: <rest>`
pub(crate) static MATCHES_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Matches: (.+)").unwrap());

/// `States visited: <n>` with an optional `| Max stack depth: <n>` suffix
pub(crate) static STATES_VISITED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^States visited: (\d+)(?:\s*\|\s*Max stack depth: (\d+))?").unwrap()
});

/// `Runs: <n>, Matches: <n>, All accepted: <yes|no>`, found anywhere in a line
pub(crate) static SUMMARY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Runs: (\d+), Matches: (\d+), All accepted: (yes|no)").unwrap()
});

/// First run of digits in a value
pub(crate) static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

pub(crate) const PATTERN_MARKER: &str = "Pattern:";
pub(crate) const DATASETS_MARKER: &str = "Datasets:";
pub(crate) const MODE_MARKER: &str = "Automaton Mode:";

pub(crate) const SEQUENCE_MARKER: &str = "Sequence:";
pub(crate) const DOT_BRACKET_MARKER: &str = "Dot-bracket:";
pub(crate) const MATCHES_MARKER: &str = "Matches:";
pub(crate) const NO_MATCHES_MARKER: &str = "No matches found.";
pub(crate) const STATES_VISITED_MARKER: &str = "States visited:";
pub(crate) const SUMMARY_MARKER: &str = "Runs:";

pub(crate) const VALID_BASES_MARKER: &str = "Valid RNA Bases";
pub(crate) const VALID_BASES_OK: &str = "OK";
pub(crate) const CHECK_MARKER: &str = "Check:";
pub(crate) const CHECK_ITEM_PREFIX: &str = "- ";
pub(crate) const RESULT_MARKER: &str = "-> Result:";
