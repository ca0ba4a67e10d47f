//! # siftsql
//!
//! Translate a URL-style query string (or an equivalent ordered key→value
//! mapping) into a SQL statement fragment: WHERE predicates from a
//! compact filter micro-language, a SELECT column list, and an ORDER BY
//! list.
//!
//! ```
//! use siftsql::{QueryInput, translate};
//!
//! let input = QueryInput::parse("?name=John&age=>_18&orderby=name");
//! let sql = translate(&input, Some("customers")).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM customers WHERE `name`='John' AND `age`>='18' ORDER BY `name` ASC"
//! );
//! ```
//!
//! The filter grammar folds junction (`OR_`, `NOT_`, `AND_`), grouping
//! (`(_`, `_)`), and operator markers (`!_`, `>_`, `<_`, `>>_`, `<<_`,
//! `~_`, `<x<`) into one value string per field. Malformed marker syntax
//! never fails: it degrades to a plain equality comparison.
//!
//! Literal values are interpolated into the statement unescaped. That is
//! a deliberate property of the translator: sanitize untrusted input
//! before handing it over, or keep the output away from a live database.

mod builder;
mod error;
mod filter;
mod order;
mod query;
mod select;
pub mod utils;

pub use builder::QueryPlan;
pub use error::TranslateError;
pub use filter::{CompareOp, Filter, FilterKind, Junction, compile, compile_all};
pub use order::{OrderDirection, OrderSpec, OrderTerm, resolve_order};
pub use query::{ParamKey, QueryInput};
pub use select::Selection;

/// Translate an input mapping into a SQL statement in one call.
///
/// Equivalent to [`QueryPlan::from_input`] followed by [`QueryPlan::sql`].
pub fn translate(input: &QueryInput, table: Option<&str>) -> Result<String, TranslateError> {
    QueryPlan::from_input(input)?.sql(table)
}
