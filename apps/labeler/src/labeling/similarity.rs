//! Ratcliff/Obershelp sequence similarity.
//!
//! `ratio = 2·M / (|a| + |b|)` where M is the total length of the matching
//! blocks found by taking the longest common substring and recursing into
//! the unmatched pieces on either side of it.
//!
//! # Time Complexity
//! O(|a| × |b|) per recursion level.
//!
//! Case-sensitive — callers normalize before comparing.

/// Computes the similarity ratio between two strings in [0.0, 1.0].
///
/// Returns 1.0 for two empty strings and 0.0 when no characters match.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_len(&a_chars, &b_chars);
    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + matched_len(&a[..a_start], &b[..b_start])
        + matched_len(&a[a_start + size..], &b[b_start + size..])
}

/// Finds the longest common substring of `a` and `b` as
/// `(start_in_a, start_in_b, length)`. Ties resolve to the earliest
/// occurrence in `a`, then in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // suffix_len[j + 1] = length of the common suffix ending at a[i], b[j]
    let mut suffix_len = vec![0usize; b.len() + 1];
    for i in 0..a.len() {
        let mut diagonal = 0;
        for j in 0..b.len() {
            let above = suffix_len[j + 1];
            if a[i] == b[j] {
                suffix_len[j + 1] = diagonal + 1;
                if suffix_len[j + 1] > best.2 {
                    best = (i + 1 - suffix_len[j + 1], j + 1 - suffix_len[j + 1], suffix_len[j + 1]);
                }
            } else {
                suffix_len[j + 1] = 0;
            }
            diagonal = above;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(sequence_ratio("python", "python"), 1.0);
    }

    #[test]
    fn test_both_empty_score_one() {
        assert_eq!(sequence_ratio("", ""), 1.0);
    }

    #[test]
    fn test_empty_vs_nonempty_score_zero() {
        assert_eq!(sequence_ratio("", "sql"), 0.0);
        assert_eq!(sequence_ratio("sql", ""), 0.0);
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        assert_eq!(sequence_ratio("python", "sql"), 0.0);
    }

    #[test]
    fn test_known_ratio_abcd_bcde() {
        // "bcd" matches: 2 * 3 / 8
        let ratio = sequence_ratio("abcd", "bcde");
        assert!((ratio - 0.75).abs() < f64::EPSILON, "ratio was {ratio}");
    }

    #[test]
    fn test_typo_scores_above_fuzzy_threshold() {
        let ratio = sequence_ratio("machine learning", "machine lerning");
        assert!(ratio > 0.75, "ratio was {ratio}");
    }

    #[test]
    fn test_symmetry() {
        let forward = sequence_ratio("data analysis", "data analytics");
        let backward = sequence_ratio("data analytics", "data analysis");
        assert!((forward - backward).abs() < f64::EPSILON);
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b), (0, 0, 2));
    }
}
