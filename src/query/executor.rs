//! Expression evaluation against an index.
//!
//! Flat spines of words joined by one operator keep the proximity
//! semantics of the grouped combinator; the tolerance applies only there.
//! Mixed levels of the tree combine their evaluated operands with exact
//! set operations, and NOT complements against the whole text range.

use crate::index::Index;
use crate::query::combine::DEFAULT_MAX_DISTANCE;
use crate::query::group::{Group, GroupKind};
use crate::query::parser::Expr;
use crate::query::setops;
use crate::text::TextPosition;

/// Evaluates parsed queries against a borrowed [`Index`].
pub struct QueryExecutor<'a> {
    index: &'a Index,
    max_distance: usize,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self {
            index,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    pub fn with_max_distance(index: &'a Index, max_distance: usize) -> Self {
        Self {
            index,
            max_distance,
        }
    }

    /// Evaluate `expr` to a sorted position list.
    pub fn execute(&self, expr: &Expr) -> Vec<TextPosition> {
        match expr {
            Expr::Empty => Vec::new(),
            Expr::Word(w) => self.index.search(w),
            Expr::And(l, r) => {
                if let Some(words) = flatten_words(expr, GroupKind::And) {
                    return self
                        .index
                        .search_group(&Group::and_of(words), self.max_distance);
                }
                setops::intersect(&self.execute(l), &self.execute(r))
            }
            Expr::Or(l, r) => {
                if let Some(words) = flatten_words(expr, GroupKind::Or) {
                    return self
                        .index
                        .search_group(&Group::or_of(words), self.max_distance);
                }
                setops::union_of(&self.execute(l), &self.execute(r))
            }
            Expr::Not(e) => setops::complement(&self.execute(e), self.index.len()),
        }
    }
}

/// Words of a spine built from `kind` operators only, or `None` if the
/// subtree mixes operators or contains NOT / Empty nodes.
fn flatten_words(expr: &Expr, kind: GroupKind) -> Option<Vec<&str>> {
    let mut words = Vec::new();
    if collect_spine(expr, kind, &mut words) {
        Some(words)
    } else {
        None
    }
}

fn collect_spine<'e>(expr: &'e Expr, kind: GroupKind, out: &mut Vec<&'e str>) -> bool {
    match (expr, kind) {
        (Expr::Word(w), _) => {
            out.push(w);
            true
        }
        (Expr::And(l, r), GroupKind::And) | (Expr::Or(l, r), GroupKind::Or) => {
            collect_spine(l, kind, out) && collect_spine(r, kind, out)
        }
        _ => false,
    }
}
