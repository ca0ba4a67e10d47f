//! Filter type definitions

use serde::{Deserialize, Serialize};

use crate::utils::sql::{quote_ident, quote_literal};

/// One parsed predicate from a field/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Column the predicate applies to
    pub name: String,
    /// Comparison, pattern, or range payload
    #[serde(flatten)]
    pub kind: FilterKind,
    /// How this filter combines with the previous one in sequence.
    /// The first filter's junction is never emitted.
    pub junction: Junction,
    /// Count of literal `(` group markers emitted before the predicate
    pub opening: usize,
    /// Count of literal `)` group markers emitted after the predicate
    pub closing: usize,
}

/// Filter kinds and their payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterKind {
    Comparison { op: CompareOp, value: String },
    Pattern { value: String },
    Range { low: String, high: String },
}

/// Comparison operators, named by their SQL spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
}

impl CompareOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// Boolean connective joining a filter to the one before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Junction {
    #[default]
    And,
    Or,
    Not,
}

impl Junction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl Filter {
    /// Render the predicate with its group markers, without the junction.
    ///
    /// Identifiers are backtick-quoted, literals single-quoted and
    /// interpolated verbatim. Group markers are emitted as counted:
    /// parenthesis balance across a filter sequence is not validated.
    pub fn to_sql(&self) -> String {
        let ident = quote_ident(&self.name);
        let predicate = match &self.kind {
            FilterKind::Comparison { op, value } => {
                format!("{}{}{}", ident, op.as_sql(), quote_literal(value))
            }
            FilterKind::Pattern { value } => {
                format!("{} LIKE {}", ident, quote_literal(value))
            }
            FilterKind::Range { low, high } => format!(
                "{} BETWEEN {} AND {}",
                ident,
                quote_literal(low),
                quote_literal(high)
            ),
        };
        format!(
            "{}{}{}",
            "(".repeat(self.opening),
            predicate,
            ")".repeat(self.closing)
        )
    }
}
