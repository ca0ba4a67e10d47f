//! Translation error types

use thiserror::Error;

/// Errors raised while resolving directives or assembling a statement.
///
/// Filter micro-syntax never raises: a value that matches no marker
/// degrades to a plain equality comparison. All errors here surface
/// synchronously to the immediate caller; there is no retry or recovery
/// inside the translator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Selection was set to `filters` but no filters were compiled
    #[error("expected filters: at least one filter must be specified")]
    EmptyFilterSet,

    /// No table name given and no WHERE content to fall back to
    #[error("expected table name: specify a table to work with")]
    MissingTable,

    /// A selection column name is empty after trimming
    #[error("invalid selection column in {column_list:?}")]
    InvalidColumnName { column_list: String },

    /// An ordering column name is empty after trimming
    #[error("invalid order column in {order_list:?}")]
    InvalidOrderColumn { order_list: String },
}

impl TranslateError {
    /// Create an invalid-selection-column error carrying the raw directive
    pub(crate) fn invalid_column(raw: &str) -> Self {
        Self::InvalidColumnName {
            column_list: raw.to_string(),
        }
    }

    /// Create an invalid-order-column error carrying the raw directive
    pub(crate) fn invalid_order(raw: &str) -> Self {
        Self::InvalidOrderColumn {
            order_list: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_set_display() {
        assert_eq!(
            TranslateError::EmptyFilterSet.to_string(),
            "expected filters: at least one filter must be specified"
        );
    }

    #[test]
    fn missing_table_display() {
        assert_eq!(
            TranslateError::MissingTable.to_string(),
            "expected table name: specify a table to work with"
        );
    }

    #[test]
    fn invalid_column_carries_directive() {
        let err = TranslateError::invalid_column("id, , country");
        assert_eq!(
            err.to_string(),
            "invalid selection column in \"id, , country\""
        );
    }
}
