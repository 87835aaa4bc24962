use serde::{Serialize, Serializer};

use crate::core::range::Range;
use crate::core::types::ValidationResult;

/// Identity parsed from a `Sequence #<n> (len=<n>)` block header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub sequence_number: u64,
    pub length: u64,
}

/// Body of a block written in the match-list grammar
/// (regex/NFA/DFA/EFA/dot-bracket matching)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchListBody {
    /// Sorted by ascending start; ties keep report order
    pub match_ranges: Vec<Range>,
    pub sequence_text: String,
    pub states_visited: u64,
    /// Only reported for pushdown automata
    pub max_stack_depth: Option<u64>,
}

/// Body of a block written in the RNA validation grammar
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rna_sequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_bracket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_bases: Option<bool>,
    pub checks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_result: Option<ValidationResult>,
    /// Engine diagnostics that fit no other slot (length mismatches, etc.)
    pub auxiliary_messages: Vec<String>,
}

/// Which grammar produced a record, with that grammar's fields
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceBody {
    MatchList(MatchListBody),
    Validation(ValidationBody),
}

/// Per-record values derived by the aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RecordStats {
    pub match_count: usize,
    pub has_matches: bool,
    /// Fraction of positions covered, in `[0, 1]`
    pub coverage: f64,
}

/// One per-sequence block of the report
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub sequence_number: u64,
    pub length: u64,
    pub body: SequenceBody,
    pub stats: RecordStats,
}

impl SequenceRecord {
    #[must_use]
    pub fn new(header: BlockHeader, body: SequenceBody) -> Self {
        Self {
            sequence_number: header.sequence_number,
            length: header.length,
            body,
            stats: RecordStats::default(),
        }
    }

    #[must_use]
    pub fn is_validation_mode(&self) -> bool {
        matches!(self.body, SequenceBody::Validation(_))
    }

    /// The sequence text for either grammar. Validation records expose their
    /// RNA sequence here.
    #[must_use]
    pub fn sequence_text(&self) -> &str {
        match &self.body {
            SequenceBody::MatchList(body) => &body.sequence_text,
            SequenceBody::Validation(body) => body.rna_sequence.as_deref().unwrap_or_default(),
        }
    }

    /// Match ranges; always empty for validation records
    #[must_use]
    pub fn match_ranges(&self) -> &[Range] {
        match &self.body {
            SequenceBody::MatchList(body) => &body.match_ranges,
            SequenceBody::Validation(_) => &[],
        }
    }

    /// States visited; validation records report none
    #[must_use]
    pub fn states_visited(&self) -> u64 {
        match &self.body {
            SequenceBody::MatchList(body) => body.states_visited,
            SequenceBody::Validation(_) => 0,
        }
    }

    #[must_use]
    pub fn validation(&self) -> Option<&ValidationBody> {
        match &self.body {
            SequenceBody::Validation(body) => Some(body),
            SequenceBody::MatchList(_) => None,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum BodyWire<'a> {
    MatchList {
        matches: Vec<&'a str>,
        match_ranges: &'a [Range],
        states_visited: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_stack_depth: Option<u64>,
    },
    Validation(&'a ValidationBody),
}

#[derive(Serialize)]
struct SequenceRecordWire<'a> {
    sequence_number: u64,
    length: u64,
    is_validation_mode: bool,
    sequence_text: &'a str,
    #[serde(flatten)]
    body: BodyWire<'a>,
    #[serde(flatten)]
    stats: &'a RecordStats,
}

impl Serialize for SequenceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match &self.body {
            SequenceBody::MatchList(body) => BodyWire::MatchList {
                matches: body.match_ranges.iter().map(|r| r.raw_text.as_str()).collect(),
                match_ranges: &body.match_ranges,
                states_visited: body.states_visited,
                max_stack_depth: body.max_stack_depth,
            },
            SequenceBody::Validation(body) => BodyWire::Validation(body),
        };

        SequenceRecordWire {
            sequence_number: self.sequence_number,
            length: self.length,
            is_validation_mode: self.is_validation_mode(),
            sequence_text: self.sequence_text(),
            body,
            stats: &self.stats,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::range::parse_range;

    fn header() -> BlockHeader {
        BlockHeader {
            sequence_number: 1,
            length: 8,
        }
    }

    #[test]
    fn test_validation_record_exposes_rna_as_text() {
        let record = SequenceRecord::new(
            header(),
            SequenceBody::Validation(ValidationBody {
                rna_sequence: Some("GGGAAACCC".to_string()),
                ..ValidationBody::default()
            }),
        );
        assert!(record.is_validation_mode());
        assert_eq!(record.sequence_text(), "GGGAAACCC");
        assert!(record.match_ranges().is_empty());
        assert_eq!(record.states_visited(), 0);
    }

    #[test]
    fn test_match_list_json_shape() {
        let record = SequenceRecord::new(
            header(),
            SequenceBody::MatchList(MatchListBody {
                match_ranges: vec![parse_range("[0,2)")],
                sequence_text: "ACGTACGT".to_string(),
                states_visited: 12,
                max_stack_depth: None,
            }),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["is_validation_mode"], false);
        assert_eq!(json["matches"], serde_json::json!(["[0,2)"]));
        assert_eq!(json["match_ranges"][0]["range"], "[0,2)");
        assert_eq!(json["match_ranges"][0]["length"], 2);
        assert_eq!(json["states_visited"], 12);
        assert_eq!(json["coverage"], 0.0);
        assert!(json.get("max_stack_depth").is_none());
        assert!(json.get("rna_sequence").is_none());
    }

    #[test]
    fn test_validation_json_shape() {
        let record = SequenceRecord::new(
            header(),
            SequenceBody::Validation(ValidationBody {
                rna_sequence: Some("GGAACC".to_string()),
                dot_bracket: Some("((..))".to_string()),
                valid_bases: Some(true),
                checks: vec!["Pairing OK".to_string()],
                validation_result: Some(ValidationResult::Valid),
                auxiliary_messages: Vec::new(),
            }),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["is_validation_mode"], true);
        assert_eq!(json["sequence_text"], "GGAACC");
        assert_eq!(json["validation_result"], "Valid");
        assert_eq!(json["dot_bracket"], "((..))");
        assert!(json.get("match_ranges").is_none());
    }
}
