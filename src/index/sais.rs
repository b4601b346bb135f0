//! Suffix-array construction by induced sorting.
//!
//! Implements SA-IS as described in Nong, Zhang & Chan,
//! "Linear Suffix Array Construction by Almost Pure Induced-Sorting" (2009),
//! generalized to the crate's 32-bit integer alphabet. The text is not
//! sentinel-extended at the interface; a sentinel smaller than every real
//! code unit is appended internally and stripped from the result.
//!
//! Time is O(n) in the text length; auxiliary memory stays O(n) integers
//! because sparse alphabets are dense-remapped before bucketing.

use crate::text::{CodeUnit, TextPosition};

/// Marker for an unfilled suffix-array slot during induction.
const UNSET: usize = usize::MAX;

/// Alphabets whose span fits under this bound are bucketed directly;
/// anything wider is dense-remapped so bucket arrays stay O(n).
const DIRECT_ALPHABET_MAX: usize = 1 << 16;

/// Build the suffix array of `text`.
///
/// The result is a permutation of `0..text.len()` ordering the suffixes
/// lexicographically by code-unit value.
pub fn suffix_array(text: &[CodeUnit]) -> Vec<TextPosition> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![0];
    }

    let (s, sigma) = reduce_alphabet(text);
    let sa = sais(&s, sigma);
    // The sentinel suffix always sorts first; drop it.
    sa.into_iter().skip(1).collect()
}

/// Shift code units into `[1, sigma)` and append the sentinel 0.
///
/// Wide alphabets are remapped to the ranks of their distinct units, which
/// bounds `sigma` by `n + 1`.
fn reduce_alphabet(text: &[CodeUnit]) -> (Vec<usize>, usize) {
    // Non-empty by the caller's guard.
    let max = text.iter().copied().max().unwrap_or(0) as usize;

    let mut s = Vec::with_capacity(text.len() + 1);
    let sigma = if max < DIRECT_ALPHABET_MAX {
        s.extend(text.iter().map(|&u| u as usize + 1));
        max + 2
    } else {
        let mut alphabet: Vec<CodeUnit> = text.to_vec();
        alphabet.sort_unstable();
        alphabet.dedup();
        s.extend(text.iter().map(|&u| {
            // Every unit is present in its own alphabet.
            alphabet.binary_search(&u).unwrap() + 1
        }));
        alphabet.len() + 2
    };
    s.push(0);
    (s, sigma)
}

/// Core recursion. `s` must end with a unique minimum sentinel; `sigma` is
/// the alphabet size (max value + 1).
fn sais(s: &[usize], sigma: usize) -> Vec<usize> {
    let n = s.len();
    let mut sa = vec![UNSET; n];
    if n == 1 {
        sa[0] = 0;
        return sa;
    }

    let stype = compute_types(s);
    let counts = bucket_counts(s, sigma);

    // LMS positions in text order.
    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(&stype, i)).collect();

    // First induction: seed LMS positions at their bucket tails, right to
    // left, then induce. This leaves the LMS substrings in sorted order.
    let mut tails = bucket_tails(&counts);
    for &i in lms.iter().rev() {
        let c = s[i];
        tails[c] -= 1;
        sa[tails[c]] = i;
    }
    induce(s, &stype, &counts, &mut sa);

    // Name the LMS substrings in their sorted order, reusing the previous
    // name exactly when the substrings are equal.
    let mut name_of = vec![UNSET; n];
    let mut names = 0usize;
    let mut prev = UNSET;
    for &p in &sa {
        if is_lms(&stype, p) {
            if prev == UNSET || !lms_substrings_equal(s, &stype, prev, p) {
                names += 1;
            }
            name_of[p] = names - 1;
            prev = p;
        }
    }

    // Order the LMS suffixes: directly if every name is distinct, otherwise
    // through the suffix array of the reduced string of names.
    let reduced: Vec<usize> = lms.iter().map(|&i| name_of[i]).collect();
    let lms_sorted: Vec<usize> = if names == reduced.len() {
        let mut order = vec![0usize; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            order[name] = i;
        }
        order
    } else {
        sais(&reduced, names)
    };

    // Final induction from the fully sorted LMS suffixes.
    sa.fill(UNSET);
    let mut tails = bucket_tails(&counts);
    for &ri in lms_sorted.iter().rev() {
        let i = lms[ri];
        let c = s[i];
        tails[c] -= 1;
        sa[tails[c]] = i;
    }
    induce(s, &stype, &counts, &mut sa);

    sa
}

/// S/L classification. `true` means S-type. The sentinel is S-type; other
/// positions compare against their successor and ties inherit rightward.
fn compute_types(s: &[usize]) -> Vec<bool> {
    let n = s.len();
    let mut stype = vec![false; n];
    stype[n - 1] = true;
    for i in (0..n - 1).rev() {
        stype[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && stype[i + 1]);
    }
    stype
}

#[inline]
fn is_lms(stype: &[bool], i: usize) -> bool {
    i > 0 && stype[i] && !stype[i - 1]
}

fn bucket_counts(s: &[usize], sigma: usize) -> Vec<usize> {
    let mut counts = vec![0usize; sigma];
    for &c in s {
        counts[c] += 1;
    }
    counts
}

/// Exclusive prefix sums: first slot of each bucket.
fn bucket_heads(counts: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(counts.len());
    let mut sum = 0;
    for &c in counts {
        heads.push(sum);
        sum += c;
    }
    heads
}

/// Inclusive prefix sums: one past the last slot of each bucket.
fn bucket_tails(counts: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(counts.len());
    let mut sum = 0;
    for &c in counts {
        sum += c;
        tails.push(sum);
    }
    tails
}

/// The two induced scans: L-type suffixes left to right into bucket heads,
/// then S-type suffixes right to left into bucket tails.
fn induce(s: &[usize], stype: &[bool], counts: &[usize], sa: &mut [usize]) {
    let n = s.len();

    let mut heads = bucket_heads(counts);
    for i in 0..n {
        let p = sa[i];
        if p != UNSET && p > 0 && !stype[p - 1] {
            let c = s[p - 1];
            sa[heads[c]] = p - 1;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(counts);
    for i in (0..n).rev() {
        let p = sa[i];
        if p != UNSET && p > 0 && stype[p - 1] {
            let c = s[p - 1];
            tails[c] -= 1;
            sa[tails[c]] = p - 1;
        }
    }
}

/// Compare the LMS substrings starting at `a` and `b`: equal iff they have
/// the same length and the same code units through the next LMS boundary.
fn lms_substrings_equal(s: &[usize], stype: &[bool], a: usize, b: usize) -> bool {
    let n = s.len();
    if a == b {
        return true;
    }
    // Only the sentinel's substring contains the final position.
    if a == n - 1 || b == n - 1 {
        return false;
    }
    let mut i = 0;
    loop {
        let a_end = i > 0 && is_lms(stype, a + i);
        let b_end = i > 0 && is_lms(stype, b + i);
        if a_end && b_end {
            return true;
        }
        if a_end != b_end || s[a + i] != s[b + i] {
            return false;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::sort::suffix_array_by_sort;
    use crate::text::encode_units;
    use proptest::prelude::*;

    fn sa_of(text: &str) -> Vec<TextPosition> {
        suffix_array(&encode_units(text))
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(sa_of(""), Vec::<TextPosition>::new());
        assert_eq!(sa_of("x"), vec![0]);
    }

    #[test]
    fn test_banana() {
        // a(5) < ana(3) < anana(1) < banana(0) < na(4) < nana(2)
        assert_eq!(sa_of("banana"), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_mississippi() {
        assert_eq!(sa_of("mississippi"), vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    }

    #[test]
    fn test_run_of_equal_units() {
        assert_eq!(sa_of("aaaa"), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_alternating() {
        assert_eq!(sa_of("abab"), vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_cjk_text() {
        let units = encode_units("罗密欧与朱丽叶。罗密欧爱朱丽叶。");
        let sa = suffix_array(&units);
        assert_eq!(sa, suffix_array_by_sort(&units));
    }

    #[test]
    fn test_remapped_wide_alphabet() {
        // Units beyond the direct-bucket bound take the remap path.
        let units: Vec<CodeUnit> = "banana"
            .chars()
            .map(|c| c as CodeUnit + 0x2_0000)
            .collect();
        assert_eq!(suffix_array(&units), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_recursion_on_repeated_lms_substrings() {
        // Repeats force equal LMS names and a recursive round.
        let units = encode_units("abcabcabcabcabc");
        assert_eq!(suffix_array(&units), suffix_array_by_sort(&units));
    }

    #[test]
    fn test_is_permutation() {
        let sa = sa_of("the quick brown fox jumps over the lazy dog");
        let mut sorted = sa.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..sa.len()).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_matches_comparison_sort(units in proptest::collection::vec(0u32..8, 0..200)) {
            prop_assert_eq!(suffix_array(&units), suffix_array_by_sort(&units));
        }

        #[test]
        fn prop_matches_comparison_sort_wide(units in proptest::collection::vec(0u32..u32::MAX / 2, 0..64)) {
            prop_assert_eq!(suffix_array(&units), suffix_array_by_sort(&units));
        }
    }
}
