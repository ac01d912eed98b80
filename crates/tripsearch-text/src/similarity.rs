//! Gestalt (Ratcliff/Obershelp) similarity over code points.
//!
//! `ratio = 2 * M / (|a| + |b|)` where `M` is the total length of the matching
//! blocks found by repeatedly taking the longest common substring and recursing
//! on the pieces to its left and right.

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
/// Ties go to the lowest `i`, then the lowest `j`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut best = (alo, blo, 0);
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];
    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            cur[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// Total size of the matching blocks between `a` and `b`.
pub fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        pending.push((alo, i, blo, j));
        pending.push((i + k, ahi, j + k, bhi));
    }
    total
}

/// Similarity in `[0, 1]`; two empty strings are identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let len = a.len() + b.len();
    if len == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_and_disjoint() {
        assert_eq!(sequence_ratio("krabi", "krabi"), 1.0);
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("", "abc"), 0.0);
    }

    #[test]
    fn counts_blocks_on_both_sides() {
        // "phuket" vs "phukat": "phuk" + "t"
        assert_eq!(matching_chars(&['p', 'h', 'u', 'k', 'e', 't'], &['p', 'h', 'u', 'k', 'a', 't']), 5);
        assert!((sequence_ratio("phuket", "phukat") - 10.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn picks_longest_block_first() {
        // Longest block "bcd" anchors the match; the leading "a" of the
        // second string lies to its left and finds nothing after it.
        assert_eq!(sequence_ratio("bcda", "abcd"), 0.75);
    }
}
