//! Core data types for simulator reports.
//!
//! - [`Report`](report::Report): one parsed simulator run
//! - [`SequenceRecord`](record::SequenceRecord): one per-sequence block, either
//!   match-list or validation grammar
//! - [`Range`](range::Range): a half-open match interval `[start, end)`
//! - [`AutomatonMode`](types::AutomatonMode), [`ValidationResult`](types::ValidationResult)
//!
//! ## Block Grammars
//!
//! | Grammar    | Produced by                         | Fields                          |
//! |------------|-------------------------------------|---------------------------------|
//! | match-list | regex, NFA, DFA, EFA, dot-bracket    | ranges, text, states visited    |
//! | validation | RNA / PDA secondary-structure check | sequence, structure, checks     |
//!
//! Every value here is built by a single parse call and not mutated after the
//! aggregator has run.

pub mod range;
pub mod record;
pub mod report;
pub mod types;
