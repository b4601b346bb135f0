//! Comparison-sort suffix-array construction.
//!
//! A conformance-identical alternative to the induced-sort builder: sort
//! every suffix position by lexicographic comparison. O(n² log n) worst
//! case, but cache-friendly and trivially correct, which makes it the
//! cross-check for the linear builder and a usable fallback on small texts.

use crate::text::{CodeUnit, TextPosition};
use rayon::prelude::*;

/// Texts above this many code units are sorted in parallel.
const PARALLEL_THRESHOLD: usize = 100_000;

/// Build the suffix array of `text` by sorting suffix positions.
pub fn suffix_array_by_sort(text: &[CodeUnit]) -> Vec<TextPosition> {
    let n = text.len();
    let mut sa: Vec<TextPosition> = (0..n).collect();

    if n > PARALLEL_THRESHOLD {
        sa.par_sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    } else {
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    }

    sa
}
