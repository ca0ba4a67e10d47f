//! Filter compilation
//!
//! Compiles raw field/value pairs into [`Filter`] records by applying the
//! grammar strip rules exactly once, in order: junction, group-open
//! markers, group-close markers, then the first matching kind marker.

use tracing::trace;

use crate::query::{ParamKey, QueryInput};

use super::grammar;
use super::types::Filter;

/// Compile one field/value pair.
///
/// Infallible: any string is syntactically acceptable. A value that
/// matches no marker becomes a plain equality comparison with junction
/// `AND`. The input is never mutated and equal inputs always yield
/// structurally equal filters.
pub fn compile(name: &str, raw: &str) -> Filter {
    let (junction, rest) = grammar::strip_junction(raw);
    let (opening, rest) = grammar::strip_opening(rest);
    let (closing, rest) = grammar::strip_closing(rest);
    let kind = grammar::match_kind(rest);
    Filter {
        name: name.to_string(),
        kind,
        junction,
        opening,
        closing,
    }
}

/// Compile every filter field of the input.
///
/// Directive keys and empty values are skipped. Compiled filter order
/// equals the mapping's insertion order; each filter's junction relates
/// it to the previous filter in that order.
pub fn compile_all(input: &QueryInput) -> Vec<Filter> {
    let filters: Vec<Filter> = input
        .pairs()
        .filter(|(key, value)| ParamKey::classify(key).is_field() && !value.is_empty())
        .map(|(key, value)| compile(key, value))
        .collect();
    trace!(count = filters.len(), "compiled filters");
    filters
}
