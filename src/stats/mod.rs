//! Derived per-record values and report-wide statistics.
//!
//! - [`coverage`]: fraction of a sequence covered by the union of its match ranges
//! - [`summary`]: match counts, totals, averages and the PDA projection
//!
//! Coverage is a set union, not a sum of lengths:
//!
//! ```text
//! len=5   [0,3)  ###..
//!         [1,4)  .###.
//! union          ####.   -> 4/5 = 0.8
//! ```

pub mod coverage;
pub mod summary;

pub use summary::aggregate;
