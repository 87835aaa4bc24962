//! Per-sequence block reader.
//!
//! A block starts at a `Sequence #<n> (len=<n>)` header. The line right after
//! the header selects one of two grammars:
//!
//! ```text
//! Sequence #1 (len=8)              Sequence #2 (len=9)
//!   Matches: [0,3) [4,6)             Sequence: GGGAAACCC
//!   ACGTACGT                         Dot-bracket: (((...)))
//!   States visited: 14
//!                                    [OK] Valid RNA Bases
//!                                    Check:
//!                                    - Balanced brackets
//!                                    -> Result: Valid
//! ```
//!
//! Match-list blocks have a fixed three-line body: one line is consumed per
//! role whether or not it parses. Validation blocks have no fixed length, so
//! the reader collects lines until the next block header (which is pushed back
//! onto the cursor), the run summary, or a match-list line.

use crate::core::range::{parse_range, Range};
use crate::core::record::{
    BlockHeader, MatchListBody, SequenceBody, SequenceRecord, ValidationBody,
};
use crate::core::types::ValidationResult;
use crate::parsing::cursor::LineCursor;
use crate::parsing::patterns::{
    BLOCK_HEADER, CHECK_ITEM_PREFIX, CHECK_MARKER, DOT_BRACKET_MARKER, MATCHES_LINE,
    MATCHES_MARKER, NO_MATCHES_MARKER, RANGE_TOKEN_SEARCH, RESULT_MARKER, SEQUENCE_MARKER,
    STATES_VISITED_LINE, STATES_VISITED_MARKER, SUMMARY_MARKER, VALID_BASES_MARKER,
    VALID_BASES_OK,
};
use crate::utils::validation::parse_count;

/// Grammar of a block body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockGrammar {
    MatchList,
    Validation,
}

/// Pick the grammar from the first line after the block header
#[must_use]
pub fn classify_block(first_line: Option<&str>) -> BlockGrammar {
    match first_line {
        Some(line) if line.contains(SEQUENCE_MARKER) => BlockGrammar::Validation,
        _ => BlockGrammar::MatchList,
    }
}

/// Parse a `Sequence #<n> (len=<n>)` block header
#[must_use]
pub fn parse_block_header(line: &str) -> Option<BlockHeader> {
    BLOCK_HEADER.captures(line.trim()).map(|caps| BlockHeader {
        sequence_number: parse_count(&caps[1]),
        length: parse_count(&caps[2]),
    })
}

/// Read one block body starting at the line after its header.
///
/// Never fails: missing or malformed lines leave their fields at the default.
pub fn read_block(header: BlockHeader, cursor: &mut LineCursor<'_>) -> SequenceRecord {
    let body = match classify_block(cursor.peek()) {
        BlockGrammar::Validation => SequenceBody::Validation(read_validation_body(cursor)),
        BlockGrammar::MatchList => SequenceBody::MatchList(read_match_list_body(cursor)),
    };
    SequenceRecord::new(header, body)
}

/// Ranges on a `Matches:` line, stably sorted by start
#[must_use]
pub fn parse_matches_line(line: &str) -> Vec<Range> {
    let Some(caps) = MATCHES_LINE.captures(line.trim()) else {
        return Vec::new();
    };

    let mut ranges: Vec<Range> = RANGE_TOKEN_SEARCH
        .find_iter(&caps[1])
        .map(|m| parse_range(m.as_str()))
        .collect();
    ranges.sort_by_key(|r| r.start);
    ranges
}

fn read_match_list_body(cursor: &mut LineCursor<'_>) -> MatchListBody {
    let mut body = MatchListBody::default();

    if let Some(line) = cursor.advance() {
        body.match_ranges = parse_matches_line(line);
    }

    if let Some(line) = cursor.advance() {
        let text = line.trim();
        // A label here means the text line was dropped; don't mistake it for sequence
        if !text.starts_with(MATCHES_MARKER) && !text.starts_with(STATES_VISITED_MARKER) {
            body.sequence_text = text.to_string();
        }
    }

    if let Some(caps) = cursor
        .advance()
        .and_then(|line| STATES_VISITED_LINE.captures(line.trim()))
    {
        body.states_visited = parse_count(&caps[1]);
        body.max_stack_depth = caps.get(2).map(|m| parse_count(m.as_str()));
    }

    body
}

fn read_validation_body(cursor: &mut LineCursor<'_>) -> ValidationBody {
    let mut body = ValidationBody::default();

    if let Some(line) = cursor.advance() {
        body.rna_sequence = line
            .split_once(SEQUENCE_MARKER)
            .map(|(_, rest)| rest.trim().to_string());
    }

    if let Some(line) = cursor.advance_if(|l| l.trim_start().starts_with(DOT_BRACKET_MARKER)) {
        body.dot_bracket = line
            .trim_start()
            .strip_prefix(DOT_BRACKET_MARKER)
            .map(|rest| rest.trim().to_string());
    }

    while cursor.advance_if(|l| l.trim().is_empty()).is_some() {}

    let lines = collect_validation_lines(cursor);
    replay_validation_lines(&lines, &mut body);
    body
}

fn is_match_list_line(line: &str) -> bool {
    line.starts_with(MATCHES_MARKER)
        || line.starts_with(NO_MATCHES_MARKER)
        || line.starts_with(STATES_VISITED_MARKER)
}

/// Non-blank lines up to the end of a validation block, with trailing
/// whitespace removed and indentation kept
fn collect_validation_lines<'a>(cursor: &mut LineCursor<'a>) -> Vec<&'a str> {
    let mut lines = Vec::new();

    while let Some(raw) = cursor.advance() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if BLOCK_HEADER.is_match(line) {
            cursor.push_back(raw);
            break;
        }
        if line.starts_with(SUMMARY_MARKER) || is_match_list_line(line) {
            break;
        }
        lines.push(raw.trim_end());
    }

    lines
}

/// Markers are matched on the indentation-free line; auxiliary messages are
/// kept as collected
fn replay_validation_lines(lines: &[&str], body: &mut ValidationBody) {
    let mut lines = lines.iter().copied().peekable();

    while let Some(line) = lines.next() {
        let marker = line.trim_start();
        if marker.contains(VALID_BASES_MARKER) {
            // The engine prints [OK]; matching the bare OK covers that token and its fallback
            body.valid_bases = Some(marker.contains(VALID_BASES_OK));
        } else if marker.starts_with(CHECK_MARKER) {
            while let Some(item) = lines
                .peek()
                .copied()
                .and_then(|l| l.trim_start().strip_prefix(CHECK_ITEM_PREFIX))
            {
                body.checks.push(item.to_string());
                lines.next();
            }
        } else if let Some(value) = marker.strip_prefix(RESULT_MARKER) {
            body.validation_result = ValidationResult::parse(value.trim());
        } else {
            body.auxiliary_messages.push(line.to_string());
        }
    }
}
