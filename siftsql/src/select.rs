//! Selection directive resolution
//!
//! Turns the raw `select`/`selection` directive into the set of columns
//! to project.

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;
use crate::filter::Filter;

/// Columns to project: everything, the filtered fields, or an explicit
/// ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// `SELECT *`
    #[default]
    All,
    /// Exactly the fields used as filters, in filter order
    FiltersOnly,
    /// Explicit column list, in directive order
    Columns(Vec<String>),
}

impl Selection {
    /// Resolve the raw directive value.
    ///
    /// Filters must already be compiled: the `filters` sentinel depends
    /// on the compiled set being non-empty. The `all` and `filters`
    /// literals match exactly; anything else is read as a comma-separated
    /// column list.
    pub fn resolve(raw: Option<&str>, filters: &[Filter]) -> Result<Self, TranslateError> {
        let Some(raw) = raw else {
            return Ok(Self::All);
        };
        match raw {
            "all" => Ok(Self::All),
            "filters" => {
                if filters.is_empty() {
                    return Err(TranslateError::EmptyFilterSet);
                }
                Ok(Self::FiltersOnly)
            }
            list => {
                let mut columns = Vec::new();
                for piece in list.split(',') {
                    let column = piece.trim();
                    if column.is_empty() {
                        return Err(TranslateError::invalid_column(list));
                    }
                    columns.push(column.to_string());
                }
                Ok(Self::Columns(columns))
            }
        }
    }
}
