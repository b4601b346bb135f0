//! The in-memory index: text plus suffix array.
//!
//! - [`sais`] - linear suffix-array construction by induced sorting
//! - [`sort`] - comparison-sort construction (cross-check / fallback)
//! - [`lcp`] - LCP and rank arrays (Kasai)
//!
//! [`Index`] owns the text and its suffix array; both are immutable after
//! construction, so queries can run concurrently over shared references.
//! Substring lookup is a double binary search over the suffix array,
//! O(m log n) per pattern.

pub mod lcp;
pub mod sais;
pub mod sort;

use crate::query::combine;
use crate::query::group::Group;
use crate::text::{encode_units, CodeUnit, Text, TextPosition};
use serde::Serialize;
use std::cmp::Ordering;

/// A searchable text. Built once; queries borrow it immutably and return
/// freshly allocated position lists.
#[derive(Debug, Clone)]
pub struct Index {
    text: Text,
    sa: Vec<TextPosition>,
}

impl Index {
    /// Build an index using induced sorting. Blocking, CPU-bound.
    pub fn build(text: Text) -> Self {
        let sa = sais::suffix_array(text.units());
        Self { text, sa }
    }

    /// Build an index using the comparison-sort builder. Same contract as
    /// [`Index::build`]; slower on large or highly repetitive texts.
    pub fn build_by_sort(text: Text) -> Self {
        let sa = sort::suffix_array_by_sort(text.units());
        Self { text, sa }
    }

    /// The indexed text.
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// The suffix array, in lexicographic suffix order.
    pub fn suffix_array(&self) -> &[TextPosition] {
        &self.sa
    }

    /// Text length in code units.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All starting positions of `pattern`, ascending. Empty patterns and
    /// patterns longer than the text match nowhere.
    pub fn search(&self, pattern: &str) -> Vec<TextPosition> {
        self.search_units(&encode_units(pattern))
    }

    /// [`Index::search`] over raw code units.
    pub fn search_units(&self, pattern: &[CodeUnit]) -> Vec<TextPosition> {
        let (lo, hi) = self.sa_range(pattern);
        let mut occ = self.sa[lo..hi].to_vec();
        // The matching block of the suffix array is in suffix order, not
        // text order.
        occ.sort_unstable();
        occ
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &str) -> usize {
        let (lo, hi) = self.sa_range(&encode_units(pattern));
        hi - lo
    }

    /// Whether `pattern` occurs at all.
    pub fn contains(&self, pattern: &str) -> bool {
        let (lo, hi) = self.sa_range(&encode_units(pattern));
        lo < hi
    }

    /// Evaluate a grouped query with proximity tolerance `max_distance`,
    /// measured in code units between pattern starts.
    pub fn search_group(&self, group: &Group, max_distance: usize) -> Vec<TextPosition> {
        combine::evaluate(self, group, max_distance)
    }

    /// LCP array of the indexed text, computed on demand.
    pub fn lcp(&self) -> Vec<usize> {
        lcp::lcp_array(self.text.units(), &self.sa)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            text_len: self.text.len(),
            suffix_count: self.sa.len(),
            max_unit: self.text.max_unit(),
        }
    }

    /// Half-open range `[lo, hi)` of suffix-array slots whose suffixes start
    /// with `pattern`.
    fn sa_range(&self, pattern: &[CodeUnit]) -> (usize, usize) {
        let n = self.text.len();
        let m = pattern.len();
        if m == 0 || n == 0 || m > n {
            return (0, 0);
        }
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// First slot whose suffix compares greater-or-equal to the pattern.
    fn lower_bound(&self, pattern: &[CodeUnit]) -> usize {
        let mut lo = 0;
        let mut hi = self.sa.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.compare_at(pattern, self.sa[mid]) == Ordering::Greater {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// First slot past the matching block.
    fn upper_bound(&self, pattern: &[CodeUnit], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.sa.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.compare_at(pattern, self.sa[mid]) == Ordering::Less {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }

    /// Compare `pattern` against the suffix at `pos`, truncated to the
    /// pattern length. A suffix that runs out first compares less.
    fn compare_at(&self, pattern: &[CodeUnit], pos: TextPosition) -> Ordering {
        let units = self.text.units();
        for (i, &pc) in pattern.iter().enumerate() {
            match units.get(pos + i) {
                None => return Ordering::Greater,
                Some(&tc) => match pc.cmp(&tc) {
                    Ordering::Equal => {}
                    other => return other,
                },
            }
        }
        Ordering::Equal
    }
}

/// Summary of an index, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub text_len: usize,
    pub suffix_count: usize,
    pub max_unit: Option<CodeUnit>,
}
