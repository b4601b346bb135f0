//! Proximity-aware merging of occurrence lists.
//!
//! Each pattern of a group is located independently, then the sorted
//! position lists fold left to right through a linear two-pointer merge.
//! Two positions pair up when their starts lie within the tolerance; a
//! pair reports its smaller start and consumes both positions, so a
//! position pairs at most once per fold step. Both inputs are sorted and
//! the pointers only advance, which keeps the output sorted.

use crate::index::Index;
use crate::query::group::{Group, GroupKind};
use crate::text::TextPosition;

/// Default proximity tolerance, in code units between pattern starts.
pub const DEFAULT_MAX_DISTANCE: usize = 5;

/// Evaluate `group` against `index`. An empty group matches every position
/// of the text.
pub fn evaluate(index: &Index, group: &Group, max_distance: usize) -> Vec<TextPosition> {
    if group.is_empty() {
        return (0..index.len()).collect();
    }

    let mut lists = group
        .patterns()
        .iter()
        .map(|pattern| index.search_units(pattern));

    let mut acc = lists.next().unwrap_or_default();
    for list in lists {
        acc = combine(&acc, &list, max_distance, group.kind());
    }
    acc
}

/// Merge two sorted position lists under the proximity rule.
///
/// Under AND, unpaired positions are dropped; once either list is
/// exhausted nothing further can pair, so an empty operand empties the
/// result. Under OR, unpaired positions pass through and the remaining
/// tail is drained.
pub fn combine(
    a: &[TextPosition],
    b: &[TextPosition],
    max_distance: usize,
    kind: GroupKind,
) -> Vec<TextPosition> {
    let mut out = Vec::with_capacity(match kind {
        GroupKind::And => a.len().min(b.len()),
        GroupKind::Or => a.len() + b.len(),
    });

    let mut j = 0;
    let mut k = 0;
    while j < a.len() && k < b.len() {
        if a[j].abs_diff(b[k]) <= max_distance {
            out.push(a[j].min(b[k]));
            j += 1;
            k += 1;
        } else if a[j] < b[k] {
            if kind == GroupKind::Or {
                out.push(a[j]);
            }
            j += 1;
        } else {
            if kind == GroupKind::Or {
                out.push(b[k]);
            }
            k += 1;
        }
    }

    if kind == GroupKind::Or {
        out.extend_from_slice(&a[j..]);
        out.extend_from_slice(&b[k..]);
    }

    out
}
