//! Query input mapping
//!
//! The translator consumes an ordered key→value mapping, decoded from a
//! URL-style query string or supplied directly as pairs. Two reserved
//! keys carry the selection and ordering directives; every other key
//! names a filter field.

use serde_json::{Map, Value};

/// Classification of one input key.
///
/// Directive keys control projection and ordering instead of naming a
/// filtered column, and are recognized before any filter compilation
/// happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    /// Reserved selection directive (`select` / `selection`)
    Select,
    /// Reserved ordering directive (`orderby`)
    OrderBy,
    /// A filter field
    Field,
}

impl ParamKey {
    /// Classify a key. Reserved keys may carry one leading `*`.
    pub fn classify(key: &str) -> Self {
        let key = key.strip_prefix('*').unwrap_or(key);
        match key {
            "select" | "selection" => Self::Select,
            "orderby" => Self::OrderBy,
            _ => Self::Field,
        }
    }

    /// True when the key names a filter field.
    pub fn is_field(self) -> bool {
        matches!(self, Self::Field)
    }
}

/// Ordered key→value mapping consumed by the translator.
///
/// Pair order is the mapping's insertion order and is observable in the
/// output: compiled filters keep it, and each filter's junction relates
/// it to the previous filter in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    pairs: Vec<(String, String)>,
}

impl QueryInput {
    /// Build from pre-decoded pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Decode a raw query string (`?a=1&b=2`, leading `?` optional).
    ///
    /// Values are taken verbatim: no percent-decoding is applied, and a
    /// pair without `=` gets an empty value. The transport is expected to
    /// use `_` as the space placeholder inside filter values.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Iterate pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Raw value of the first key classified as `wanted`, if any.
    pub(crate) fn directive(&self, wanted: ParamKey) -> Option<&str> {
        self.pairs()
            .find(|(key, _)| ParamKey::classify(key) == wanted)
            .map(|(_, value)| value)
    }
}

impl From<&Map<String, Value>> for QueryInput {
    /// Convert a JSON object, keeping key order (requires serde_json's
    /// `preserve_order` feature, which this crate enables).
    ///
    /// String values are taken verbatim; other values use their JSON
    /// rendering.
    fn from(map: &Map<String, Value>) -> Self {
        let pairs = map
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), value)
            })
            .collect();
        Self { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reserved_keys() {
        assert_eq!(ParamKey::classify("select"), ParamKey::Select);
        assert_eq!(ParamKey::classify("selection"), ParamKey::Select);
        assert_eq!(ParamKey::classify("orderby"), ParamKey::OrderBy);
        assert_eq!(ParamKey::classify("*select"), ParamKey::Select);
        assert_eq!(ParamKey::classify("*orderby"), ParamKey::OrderBy);
    }

    #[test]
    fn classify_field_keys() {
        assert_eq!(ParamKey::classify("name"), ParamKey::Field);
        // Reserved keys match exactly; a different case is a field name
        assert_eq!(ParamKey::classify("Select"), ParamKey::Field);
        assert_eq!(ParamKey::classify("order_by"), ParamKey::Field);
    }

    #[test]
    fn parse_strips_leading_question_mark() {
        let input = QueryInput::parse("?name=John&lastname=Doe");
        let pairs: Vec<_> = input.pairs().collect();
        assert_eq!(pairs, vec![("name", "John"), ("lastname", "Doe")]);
    }

    #[test]
    fn parse_without_question_mark() {
        let input = QueryInput::parse("name=John");
        assert_eq!(input.pairs().next(), Some(("name", "John")));
    }

    #[test]
    fn parse_empty_string() {
        assert!(QueryInput::parse("").is_empty());
        assert!(QueryInput::parse("?").is_empty());
    }

    #[test]
    fn parse_keeps_values_undecoded() {
        // No percent-decoding: the raw bytes go straight through.
        let input = QueryInput::parse("?address=78 High Street, Hampton&q=a%20b");
        let pairs: Vec<_> = input.pairs().collect();
        assert_eq!(
            pairs,
            vec![("address", "78 High Street, Hampton"), ("q", "a%20b")]
        );
    }

    #[test]
    fn parse_splits_at_first_equals_only() {
        let input = QueryInput::parse("?name==_John");
        assert_eq!(input.pairs().next(), Some(("name", "=_John")));
    }

    #[test]
    fn parse_pair_without_equals_gets_empty_value() {
        let input = QueryInput::parse("?name");
        assert_eq!(input.pairs().next(), Some(("name", "")));
    }

    #[test]
    fn directive_lookup_finds_first_match() {
        let input = QueryInput::parse("?select=all&name=John");
        assert_eq!(input.directive(ParamKey::Select), Some("all"));
        assert_eq!(input.directive(ParamKey::OrderBy), None);
    }

    #[test]
    fn from_json_map_preserves_order() {
        let value: Value =
            serde_json::from_str(r#"{"z": "1", "a": "2", "count": 3}"#).unwrap();
        let map = value.as_object().unwrap();
        let input = QueryInput::from(map);
        let pairs: Vec<_> = input.pairs().collect();
        assert_eq!(pairs, vec![("z", "1"), ("a", "2"), ("count", "3")]);
    }
}
