//! Order directive resolution
//!
//! Turns the raw `orderby` directive into ordered `(column, direction)`
//! terms for the ORDER BY clause.

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;
use crate::utils::sql::quote_ident;

/// Ordered terms for the ORDER BY clause.
pub type OrderSpec = Vec<OrderTerm>;

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTerm {
    pub column: String,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl OrderTerm {
    /// `` `column` ASC `` fragment; the direction is always explicit.
    pub fn to_sql(&self) -> String {
        format!("{} {}", quote_ident(&self.column), self.direction.as_sql())
    }
}

/// Resolve the raw `orderby` directive.
///
/// An absent or empty directive means no ordering. Each comma-separated
/// piece is trimmed; a trailing whitespace-separated `asc`/`desc`
/// (case-insensitive) fixes the direction, which otherwise defaults to
/// ascending.
pub fn resolve_order(raw: Option<&str>) -> Result<Option<OrderSpec>, TranslateError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let mut terms = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        let (column, direction) = split_direction(piece);
        if column.is_empty() {
            return Err(TranslateError::invalid_order(raw));
        }
        terms.push(OrderTerm {
            column: column.to_string(),
            direction,
        });
    }
    Ok(Some(terms))
}

/// Split a trailing direction keyword off one ORDER BY piece.
///
/// The keyword only counts when preceded by whitespace: `birthDate desc`
/// names a column and a direction, `somedesc` is just a column.
fn split_direction(piece: &str) -> (&str, OrderDirection) {
    for (suffix, direction) in [("asc", OrderDirection::Asc), ("desc", OrderDirection::Desc)] {
        let Some(at) = piece.len().checked_sub(suffix.len()) else {
            continue;
        };
        let Some(tail) = piece.get(at..) else {
            continue;
        };
        if tail.eq_ignore_ascii_case(suffix) {
            let head = &piece[..at];
            if head.ends_with(char::is_whitespace) {
                return (head.trim_end(), direction);
            }
        }
    }
    (piece, OrderDirection::Asc)
}
