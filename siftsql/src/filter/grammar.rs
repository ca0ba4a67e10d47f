//! Filter value micro-grammar
//!
//! A raw field value folds junction, grouping, and operator markers into
//! one string, e.g. `OR_(_>_18` or `18<x<65`. Parsing is an ordered
//! sequence of strip rules: each rule consumes its marker from the front
//! or back of the remaining string and the next rule inspects what is
//! left. Markers match case-insensitively.

use super::types::{CompareOp, FilterKind, Junction};

/// Operator markers in match order. First match wins; the longer `>>_`
/// and `<<_` markers cannot collide with `>_`/`<_` because the second
/// character differs.
const OPERATOR_RULES: &[(&str, CompareOp)] = &[
    ("!_", CompareOp::Ne),
    (">_", CompareOp::Gte),
    ("<_", CompareOp::Lte),
    (">>_", CompareOp::Gt),
    ("<<_", CompareOp::Lt),
];

const PATTERN_MARKER: &str = "~_";
const RANGE_MARKER: &str = "<x<";
const GROUP_OPEN: &str = "(_";
const GROUP_CLOSE: &str = "_)";

/// Strip a leading junction marker. Absent marker defaults to `AND`.
pub(super) fn strip_junction(value: &str) -> (Junction, &str) {
    if let Some(rest) = strip_prefix_ci(value, "OR_") {
        (Junction::Or, rest)
    } else if let Some(rest) = strip_prefix_ci(value, "NOT_") {
        (Junction::Not, rest)
    } else if let Some(rest) = strip_prefix_ci(value, "AND_") {
        (Junction::And, rest)
    } else {
        (Junction::And, value)
    }
}

/// Count and strip leading `(_` group-open markers.
pub(super) fn strip_opening(mut value: &str) -> (usize, &str) {
    let mut count = 0;
    while let Some(rest) = value.strip_prefix(GROUP_OPEN) {
        count += 1;
        value = rest;
    }
    (count, value)
}

/// Count and strip trailing `_)` group-close markers.
pub(super) fn strip_closing(mut value: &str) -> (usize, &str) {
    let mut count = 0;
    while let Some(rest) = value.strip_suffix(GROUP_CLOSE) {
        count += 1;
        value = rest;
    }
    (count, value)
}

/// Match the remaining string against the kind rules, in order: operator
/// prefixes, the pattern prefix, a range marker anywhere, and finally the
/// equality fallback that accepts any string unchanged.
pub(super) fn match_kind(value: &str) -> FilterKind {
    for (marker, op) in OPERATOR_RULES {
        if let Some(rest) = strip_prefix_ci(value, marker) {
            return FilterKind::Comparison {
                op: *op,
                value: rest.to_string(),
            };
        }
    }
    if let Some(rest) = strip_prefix_ci(value, PATTERN_MARKER) {
        return FilterKind::Pattern {
            value: rest.to_string(),
        };
    }
    if let Some((low, high)) = split_range(value) {
        return FilterKind::Range { low, high };
    }
    FilterKind::Comparison {
        op: CompareOp::Eq,
        value: value.to_string(),
    }
}

/// Case-insensitive `strip_prefix`.
fn strip_prefix_ci<'a>(value: &'a str, marker: &str) -> Option<&'a str> {
    let head = value.get(..marker.len())?;
    head.eq_ignore_ascii_case(marker)
        .then(|| &value[marker.len()..])
}

/// Split at the first `<X<` occurrence into (low, high).
fn split_range(value: &str) -> Option<(String, String)> {
    let at = value.to_ascii_lowercase().find(RANGE_MARKER)?;
    let low = &value[..at];
    let high = &value[at + RANGE_MARKER.len()..];
    Some((low.to_string(), high.to_string()))
}
