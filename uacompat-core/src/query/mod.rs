//! Browser Version Queries
//!
//! A query is a comma-separated list of `<browser><op><version>` clauses,
//! e.g. `chrome>=92,safari>=14,firefox>=90`. A record matches when any clause
//! holds for its equivalent browser.
//!
//! Queries are parsed up front: a bad clause fails the whole query before a
//! single record is read.

mod error;
mod evaluate;
mod parse;
mod types;

pub use error::{ClauseFault, QuerySyntaxError};
pub use evaluate::{QueryEvaluator, Summary, evaluate};
pub use parse::{parse_clause, parse_query};
pub use types::{Operator, Predicate};
