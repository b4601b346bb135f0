//! LCP and rank arrays.
//!
//! Kasai's algorithm: walk the text in position order, carrying over the
//! common-prefix length `h` from the previous position, which can shrink by
//! at most one per step. O(n) total.

use crate::text::{CodeUnit, TextPosition};

/// Inverse permutation of the suffix array: `rank[sa[i]] = i`.
pub fn rank_array(sa: &[TextPosition]) -> Vec<usize> {
    let mut rank = vec![0usize; sa.len()];
    for (i, &p) in sa.iter().enumerate() {
        rank[p] = i;
    }
    rank
}

/// LCP array for `text` under `sa`: `lcp[i]` is the longest common prefix
/// of the suffixes at `sa[i - 1]` and `sa[i]`, with `lcp[0] = 0`.
pub fn lcp_array(text: &[CodeUnit], sa: &[TextPosition]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n];
    if n == 0 {
        return lcp;
    }

    let rank = rank_array(sa);
    let mut h = 0usize;
    for i in 0..n {
        if rank[i] == 0 {
            h = 0;
            continue;
        }
        let j = sa[rank[i] - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        if h > 0 {
            h -= 1;
        }
    }
    lcp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::sais::suffix_array;
    use crate::text::encode_units;

    #[test]
    fn test_banana_lcp() {
        let units = encode_units("banana");
        let sa = suffix_array(&units);
        // a | ana | anana | banana | na | nana
        assert_eq!(lcp_array(&units, &sa), vec![0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(lcp_array(&[], &[]), Vec::<usize>::new());
    }

    #[test]
    fn test_rank_is_inverse() {
        let units = encode_units("abracadabra");
        let sa = suffix_array(&units);
        let rank = rank_array(&sa);
        for (i, &p) in sa.iter().enumerate() {
            assert_eq!(rank[p], i);
        }
    }

    #[test]
    fn test_lcp_matches_naive() {
        let units = encode_units("mississippi");
        let sa = suffix_array(&units);
        let lcp = lcp_array(&units, &sa);
        assert_eq!(lcp[0], 0);
        for i in 1..sa.len() {
            let a = &units[sa[i - 1]..];
            let b = &units[sa[i]..];
            let naive = a.iter().zip(b).take_while(|(x, y)| x == y).count();
            assert_eq!(lcp[i], naive);
        }
    }
}
