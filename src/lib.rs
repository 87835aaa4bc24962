//! # automata-report
//!
//! A library for turning the text report of the automata simulator into
//! structured data.
//!
//! The simulator runs pattern and automaton matching (regex, NFA, DFA, EFA,
//! dot-bracket) or RNA secondary-structure validation (PDA) over a set of
//! sequences and prints a free-text report. Its format is not versioned, so
//! the parser here is best-effort: it tolerates missing lines, extra
//! whitespace and reordered header fields, and never fails.
//!
//! ## Features
//!
//! - **Two block grammars**: match-list and validation blocks share one record type
//! - **Range parsing**: `[start,end)` tokens become structured, sorted ranges
//! - **Coverage**: union of matched positions per sequence, overlaps counted once
//! - **Run statistics**: totals, averages and a PDA-specific projection
//!
//! ## Example
//!
//! ```rust
//! use automata_report::parse_report;
//!
//! let stdout = "\
//! Pattern: ACGT
//! Datasets: 1 sequence(s)
//! Automaton Mode: DFA
//! Sequence #1 (len=5)
//!   Matches: [0,3) [1,4)
//!   ACGTA
//!   States visited: 12
//! Runs: 1, Matches: 2, All accepted: no
//! ";
//!
//! let report = parse_report(stdout);
//! assert_eq!(report.header.pattern, "ACGT");
//! assert_eq!(report.stats.total_sequences, 1);
//! assert!((report.sequences[0].stats.coverage - 0.8).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report, sequence record and range types
//! - [`parsing`]: Header extraction, block segmentation and block grammars
//! - [`stats`]: Coverage and report-wide aggregates
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::range::{parse_range, Range};
pub use crate::core::record::{SequenceBody, SequenceRecord};
pub use crate::core::report::{PdaProjection, Report};
pub use crate::core::types::*;
pub use crate::parsing::report::parse_report;
