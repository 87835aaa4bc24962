use crate::core::record::{RecordStats, SequenceBody, SequenceRecord};
use crate::core::report::{PdaProjection, Report, ReportStats};
use crate::core::types::AutomatonMode;
use crate::stats::coverage::{match_coverage, validation_coverage};
use crate::utils::validation::count_to_f64;

/// Derived values for one record.
///
/// Match-list records count their ranges. A validation record counts as one
/// match when its result is `Valid`.
#[must_use]
pub fn record_stats(record: &SequenceRecord) -> RecordStats {
    let (match_count, coverage) = match &record.body {
        SequenceBody::MatchList(body) => (
            body.match_ranges.len(),
            match_coverage(&body.match_ranges, record.length),
        ),
        SequenceBody::Validation(body) => {
            let passed = body.validation_result.is_some_and(|r| r.is_valid());
            (
                usize::from(passed),
                validation_coverage(body.validation_result, record.length),
            )
        }
    };

    RecordStats {
        match_count,
        has_matches: match_count > 0,
        coverage,
    }
}

/// Totals and mean coverage over all records
#[must_use]
pub fn report_stats(records: &[SequenceRecord]) -> ReportStats {
    let total_sequences = records.len();
    let average_coverage = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.stats.coverage).sum::<f64>() / count_to_f64(total_sequences as u64)
    };

    ReportStats {
        total_sequences,
        sequences_with_matches: records.iter().filter(|r| r.stats.has_matches).count(),
        total_states_visited: records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.states_visited())),
        average_coverage,
    }
}

/// One projection per record when the run used a pushdown automaton
#[must_use]
pub fn pda_projections(mode: &AutomatonMode, records: &[SequenceRecord]) -> Option<Vec<PdaProjection>> {
    mode.is_pushdown()
        .then(|| records.iter().map(PdaProjection::from).collect())
}

/// Fill in every derived field of `report`. Runs once, after all blocks are read.
pub fn aggregate(report: &mut Report) {
    for record in &mut report.sequences {
        record.stats = record_stats(record);
    }
    report.stats = report_stats(&report.sequences);
    report.pda_sequences = pda_projections(&report.mode(), &report.sequences);
}
