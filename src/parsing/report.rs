use crate::core::record::SequenceRecord;
use crate::core::report::Report;
use crate::parsing::block::{parse_block_header, read_block};
use crate::parsing::cursor::LineCursor;
use crate::parsing::header::extract_header;
use crate::stats::aggregate;

/// Parse captured simulator output into a [`Report`].
///
/// Total and deterministic: malformed or missing structure degrades to
/// default values, never to an error.
///
/// # Examples
///
/// ```
/// use automata_report::parse_report;
///
/// let report = parse_report("Pattern: AC\nSequence #1 (len=4)\n  Matches: [0,2)\n  ACAC\n  States visited: 5\n");
/// assert_eq!(report.header.pattern, "AC");
/// assert_eq!(report.stats.total_sequences, 1);
/// assert_eq!(report.sequences[0].stats.coverage, 0.5);
/// ```
#[must_use]
pub fn parse_report(text: &str) -> Report {
    let mut report = Report {
        header: extract_header(text),
        sequences: segment_blocks(text),
        ..Report::default()
    };
    aggregate(&mut report);
    report
}

/// Find every `Sequence #<n> (len=<n>)` block and read it, in document order.
///
/// Lines outside blocks are skipped. The cursor only moves forward, apart from
/// a header the block reader hands back, so each header opens exactly one block.
#[must_use]
pub fn segment_blocks(text: &str) -> Vec<SequenceRecord> {
    let mut cursor = LineCursor::new(text);
    let mut records = Vec::new();

    while let Some(line) = cursor.advance() {
        if let Some(header) = parse_block_header(line) {
            records.push(read_block(header, &mut cursor));
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ValidationResult;

    const DFA_REPORT: &str = "\
Pattern: ACGT
Datasets: 2 sequence(s)
Automaton Mode: DFA

Sequence #1 (len=8)
  Matches: [0,4) [4,8)
  ACGTACGT
  States visited: 9

Sequence #2 (len=5)
  No matches found.
  TTTTT
  States visited: 6

Runs: 1, Matches: 2, All accepted: no
";

    #[test]
    fn test_parse_match_list_report() {
        let report = parse_report(DFA_REPORT);
        assert_eq!(report.header.pattern, "ACGT");
        assert_eq!(report.header.dataset_count, 2);
        assert_eq!(report.header.automaton_mode, "DFA");
        assert_eq!(report.summary().runs, 1);
        assert_eq!(report.summary().total_matches, 2);
        assert!(!report.summary().all_accepted);

        assert_eq!(report.stats.total_sequences, 2);
        assert_eq!(report.stats.sequences_with_matches, 1);
        assert_eq!(report.stats.total_states_visited, 15);
        assert!((report.stats.average_coverage - 0.5).abs() < f64::EPSILON);
        assert_eq!(report.sequences[1].sequence_text(), "TTTTT");
        assert!(report.pda_sequences.is_none());
    }

    #[test]
    fn test_segment_consecutive_validation_blocks() {
        let text = "\
Automaton Mode: PDA
Sequence #1 (len=6)
Sequence: GGAUCC
Dot-bracket: ((..))
[OK] Valid RNA Bases
-> Result: Valid
Sequence #2 (len=4)
Sequence: GGAU
Dot-bracket: ((.)
Length mismatch or unbalanced structure
-> Result: Invalid
Runs: 2, Matches: 1, All accepted: no
";
        let report = parse_report(text);
        assert_eq!(report.sequences.len(), 2);
        assert_eq!(report.sequences[0].sequence_number, 1);
        assert_eq!(report.sequences[1].sequence_number, 2);
        let second = report.sequences[1].validation().unwrap();
        assert_eq!(second.validation_result, Some(ValidationResult::Invalid));
        assert_eq!(
            second.auxiliary_messages,
            vec!["Length mismatch or unbalanced structure"]
        );
        assert_eq!(report.stats.sequences_with_matches, 1);
        assert_eq!(report.pda_sequences.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_duplicate_numbers_are_kept() {
        let text = "Sequence #1 (len=2)\nMatches: [0,1)\nAC\nStates visited: 1\nSequence #1 (len=2)\nMatches: [1,2)\nAC\nStates visited: 1\n";
        let records = segment_blocks(text);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.sequence_number == 1));
    }

    #[test]
    fn test_empty_input() {
        let report = parse_report("");
        assert_eq!(report.stats.total_sequences, 0);
        assert!(report.stats.average_coverage.abs() < f64::EPSILON);
        assert_eq!(report, parse_report(""));
    }

    #[test]
    fn test_header_at_end_of_text() {
        let report = parse_report("Sequence #7 (len=10)");
        assert_eq!(report.sequences.len(), 1);
        assert_eq!(report.sequences[0].stats.match_count, 0);
        assert!(report.sequences[0].stats.coverage.abs() < f64::EPSILON);
    }
}
