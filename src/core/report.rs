use serde::Serialize;

use crate::core::record::{RecordStats, SequenceRecord};
use crate::core::types::{AutomatonMode, ValidationResult};

/// Counters from the trailing `Runs: .., Matches: .., All accepted: ..` line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub runs: u64,
    #[serde(rename = "matches")]
    pub total_matches: u64,
    pub all_accepted: bool,
}

/// Report-wide fields found by scanning every line, independent of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFields {
    pub pattern: String,
    #[serde(rename = "datasets")]
    pub dataset_descriptor: String,
    /// First number in the datasets descriptor, 0 if none
    pub dataset_count: u64,
    /// Raw label; compare through [`AutomatonMode`]
    pub automaton_mode: String,
    #[serde(flatten)]
    pub summary: RunSummary,
}

/// Aggregates computed over all sequence records
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReportStats {
    pub total_sequences: usize,
    pub sequences_with_matches: usize,
    pub total_states_visited: u64,
    /// Mean record coverage, 0.0 for an empty report
    pub average_coverage: f64,
}

/// Read-only view of a record for pushdown-automaton consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdaProjection {
    pub sequence_number: u64,
    pub length: u64,
    pub sequence_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_bracket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_result: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_bases: Option<bool>,
    pub checks: Vec<String>,
    pub auxiliary_messages: Vec<String>,
    #[serde(flatten)]
    pub stats: RecordStats,
}

impl From<&SequenceRecord> for PdaProjection {
    fn from(record: &SequenceRecord) -> Self {
        let validation = record.validation();
        Self {
            sequence_number: record.sequence_number,
            length: record.length,
            sequence_text: record.sequence_text().to_string(),
            dot_bracket: validation.and_then(|v| v.dot_bracket.clone()),
            validation_result: validation.and_then(|v| v.validation_result),
            valid_bases: validation.and_then(|v| v.valid_bases),
            checks: validation.map(|v| v.checks.clone()).unwrap_or_default(),
            auxiliary_messages: validation
                .map(|v| v.auxiliary_messages.clone())
                .unwrap_or_default(),
            stats: record.stats,
        }
    }
}

/// Structured form of one simulator report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub header: HeaderFields,
    /// Document order; numbers are not checked for uniqueness
    pub sequences: Vec<SequenceRecord>,
    #[serde(flatten)]
    pub stats: ReportStats,
    /// Present only for PDA runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_sequences: Option<Vec<PdaProjection>>,
}

impl Report {
    #[must_use]
    pub fn mode(&self) -> AutomatonMode {
        AutomatonMode::parse(&self.header.automaton_mode)
    }

    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.header.summary
    }
}
