//! Case-insensitive highlighting of the query inside a suggestion label.
//!
//! Offsets are character positions, not byte positions, so labels with
//! non-ASCII text split cleanly.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

/// A run of label text that is either emphasised or plain.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LabelPart {
    pub text: String,
    pub highlight: bool,
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns every non-overlapping occurrence of `query` in `label`, scanning
/// left to right. An empty query matches nothing.
pub fn match_ranges(label: &str, query: &str) -> Vec<MatchRange> {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return Vec::new();
    }

    let label: Vec<char> = label.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + query.len() <= label.len() {
        let matched = label[start..start + query.len()]
            .iter()
            .zip(&query)
            .all(|(a, b)| chars_eq_ignore_case(*a, *b));

        if matched {
            ranges.push(MatchRange {
                start,
                end: start + query.len(),
            });
            start += query.len();
        } else {
            start += 1;
        }
    }

    ranges
}

/// Splits `label` into alternating plain/highlighted parts along `ranges`.
pub fn parse(label: &str, ranges: &[MatchRange]) -> Vec<LabelPart> {
    let chars: Vec<char> = label.chars().collect();
    let mut parts = Vec::new();
    let mut cursor = 0;

    let mut push = |from: usize, to: usize, highlight: bool| {
        if from < to {
            parts.push(LabelPart {
                text: chars[from..to].iter().collect(),
                highlight,
            });
        }
    };

    for range in ranges {
        let end = range.end.min(chars.len());
        push(cursor, range.start.min(end), false);
        push(range.start.min(end), end, true);
        cursor = end;
    }
    push(cursor, chars.len(), false);

    parts
}

/// Convenience for the view: the parts of `label` emphasised for `query`.
pub fn highlight(label: &str, query: &str) -> Vec<LabelPart> {
    parse(label, &match_ranges(label, query))
}
