//! Statement assembly
//!
//! Composes SELECT, WHERE, and ORDER BY fragments from a resolved plan
//! into one SQL string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TranslateError;
use crate::filter::{Filter, compile_all};
use crate::order::{OrderSpec, OrderTerm, resolve_order};
use crate::query::{ParamKey, QueryInput};
use crate::select::Selection;
use crate::utils::sql::quote_ident;

/// Fully resolved query plan: filters, projection, and ordering.
///
/// Built fresh from each input and immutable afterwards. Assembling a
/// statement does not mutate the plan, so one plan can be rendered
/// against several tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    pub filters: Vec<Filter>,
    pub selection: Selection,
    pub order: Option<OrderSpec>,
}

impl QueryPlan {
    /// Resolve an input mapping into a plan.
    ///
    /// Filters are compiled first; the `filters` selection sentinel
    /// depends on the compiled set being non-empty.
    pub fn from_input(input: &QueryInput) -> Result<Self, TranslateError> {
        let filters = compile_all(input);
        let selection = Selection::resolve(input.directive(ParamKey::Select), &filters)?;
        let order = resolve_order(input.directive(ParamKey::OrderBy))?;
        debug!(filters = filters.len(), "resolved query plan");
        Ok(Self {
            filters,
            selection,
            order,
        })
    }

    /// Assemble the SQL statement.
    ///
    /// With a table name the full `SELECT ... FROM ...` statement is
    /// produced; an explicitly empty table name is accepted as given.
    /// Without one, only the WHERE fragment is returned, and a plan with
    /// no filters has nothing meaningful to emit.
    pub fn sql(&self, table: Option<&str>) -> Result<String, TranslateError> {
        let where_clause = self.where_clause();

        let Some(table) = table else {
            if where_clause.is_empty() {
                return Err(TranslateError::MissingTable);
            }
            return Ok(where_clause);
        };

        let mut sql = format!("SELECT {} FROM {}", self.select_clause(), table);
        if !where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&where_clause);
        }
        if let Some(order_clause) = self.order_clause() {
            sql.push(' ');
            sql.push_str(&order_clause);
        }
        debug!(statement = %sql, "assembled statement");
        Ok(sql)
    }

    /// `WHERE ...` fragment, empty when there are no filters.
    ///
    /// The first filter never contributes its junction token, whatever it
    /// parsed to. Group markers are emitted as counted: parenthesis
    /// balance across the sequence is not validated, so unbalanced input
    /// produces unbalanced SQL.
    pub fn where_clause(&self) -> String {
        if self.filters.is_empty() {
            return String::new();
        }
        let mut clause = String::from("WHERE ");
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                clause.push(' ');
                clause.push_str(filter.junction.as_sql());
                clause.push(' ');
            }
            clause.push_str(&filter.to_sql());
        }
        clause
    }

    /// Field list for the SELECT clause.
    fn select_clause(&self) -> String {
        match &self.selection {
            Selection::All => "*".to_string(),
            Selection::FiltersOnly => {
                join_idents(self.filters.iter().map(|filter| filter.name.as_str()))
            }
            Selection::Columns(columns) => join_idents(columns.iter().map(String::as_str)),
        }
    }

    /// `ORDER BY ...` fragment, if ordering was requested.
    fn order_clause(&self) -> Option<String> {
        let order = self.order.as_ref()?;
        let terms: Vec<String> = order.iter().map(OrderTerm::to_sql).collect();
        Some(format!("ORDER BY {}", terms.join(", ")))
    }
}

fn join_idents<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.map(quote_ident).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(raw: &str) -> QueryPlan {
        QueryPlan::from_input(&QueryInput::parse(raw)).unwrap()
    }

    #[test]
    fn where_clause_joins_with_junctions() {
        let plan = plan("?name=John&lastname=OR_Doe&age=NOT_18");
        assert_eq!(
            plan.where_clause(),
            "WHERE `name`='John' OR `lastname`='Doe' NOT `age`='18'"
        );
    }

    #[test]
    fn first_filter_junction_is_never_emitted() {
        let plan = plan("?name=OR_John");
        assert_eq!(plan.where_clause(), "WHERE `name`='John'");
    }

    #[test]
    fn group_markers_surround_their_filters() {
        let plan = plan("?a=(_1&b=OR_2_)");
        assert_eq!(plan.where_clause(), "WHERE (`a`='1' OR `b`='2')");
    }

    #[test]
    fn unbalanced_groups_pass_through() {
        let plan = plan("?a=(_1&b=2");
        assert_eq!(plan.where_clause(), "WHERE (`a`='1' AND `b`='2'");
    }

    #[test]
    fn no_filters_yields_empty_where() {
        assert_eq!(plan("?select=all").where_clause(), "");
    }

    #[test]
    fn missing_table_without_filters() {
        assert_eq!(plan("").sql(None), Err(TranslateError::MissingTable));
        assert_eq!(plan("?orderby=name").sql(None), Err(TranslateError::MissingTable));
    }

    #[test]
    fn where_only_fragment_without_table() {
        assert_eq!(plan("?name=John").sql(None).unwrap(), "WHERE `name`='John'");
    }

    #[test]
    fn select_star_from_table() {
        assert_eq!(plan("").sql(Some("customers")).unwrap(), "SELECT * FROM customers");
    }

    #[test]
    fn empty_table_name_is_accepted() {
        assert_eq!(plan("").sql(Some("")).unwrap(), "SELECT * FROM ");
    }

    #[test]
    fn filters_selection_projects_filter_fields_in_order() {
        let plan = plan("?select=filters&name=John&age=>_18");
        assert_eq!(
            plan.sql(Some("customers")).unwrap(),
            "SELECT `name`, `age` FROM customers WHERE `name`='John' AND `age`>='18'"
        );
    }

    #[test]
    fn plan_is_reusable_across_tables() {
        let plan = plan("?name=John");
        assert_eq!(
            plan.sql(Some("customers")).unwrap(),
            "SELECT * FROM customers WHERE `name`='John'"
        );
        assert_eq!(
            plan.sql(Some("employees")).unwrap(),
            "SELECT * FROM employees WHERE `name`='John'"
        );
        assert_eq!(plan.sql(None).unwrap(), "WHERE `name`='John'");
    }
}
