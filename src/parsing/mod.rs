//! Parser for the automata simulator's text report.
//!
//! The report is read in a single forward pass:
//!
//! - [`header`]: `Pattern:`, `Datasets:`, `Automaton Mode:` and the run summary,
//!   found anywhere in the text
//! - [`report`]: splits the text into per-sequence blocks
//! - [`block`]: reads one block in either the match-list or validation grammar
//! - [`cursor`]: line cursor shared by the segmenter and block reader
//! - [`input`]: loads captured output from files, gzip files or stdin
//!
//! ## Example
//!
//! ```rust
//! use automata_report::parsing::report::parse_report;
//!
//! let text = "Automaton Mode: NFA\nSequence #1 (len=4)\n  Matches: [0,3) [1,4)\n  ACGA\n  States visited: 11\nRuns: 1, Matches: 2, All accepted: no\n";
//! let report = parse_report(text);
//! assert_eq!(report.sequences[0].match_ranges().len(), 2);
//! assert_eq!(report.stats.total_states_visited, 11);
//! ```
//!
//! Nothing here fails or logs: unknown lines are skipped and missing fields
//! keep their defaults.

pub mod block;
pub mod cursor;
pub mod header;
pub mod input;
pub(crate) mod patterns;
pub mod report;
