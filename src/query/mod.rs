//! Query construction and evaluation.
//!
//! - [`group`] - flat AND/OR groups of literal patterns
//! - [`combine`] - the proximity-aware position-list merge
//! - [`parser`] - `_AND_` / `_OR_` / `_NOT_` query-string parsing
//! - [`executor`] - boolean expression evaluation over an index
//! - [`setops`] - exact sorted-list set operations

pub mod combine;
pub mod executor;
pub mod group;
pub mod parser;
pub mod setops;

pub use combine::{combine, evaluate, DEFAULT_MAX_DISTANCE};
pub use executor::QueryExecutor;
pub use group::{Group, GroupKind};
pub use parser::{parse_query, Expr};
