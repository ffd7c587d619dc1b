//! Similarity scoring and best-match selection.
//!
//! Scoring uses the Ratcliff/Obershelp ratio: recursively locate the longest
//! common contiguous run of characters, count the characters participating in
//! matching runs on both flanks, and return `2 * matches / total_len`. This is
//! a full linear scan over the candidate corpus per query - correctness over
//! throughput, which is fine for corpora in the thousands.

use crate::normalize::normalize_url;

/// Minimum similarity to accept a match (exclusive).
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Ratcliff/Obershelp similarity between two strings, in [0.0, 1.0].
/// Two empty strings are identical and score 1.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Characters participating in matching contiguous runs: the longest common
/// run plus, recursively, the matches in the unmatched flanks on either side.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (ai, bi, len) = longest_common_run(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..ai], &b[..bi]) + matching_chars(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous run, as (start in a, start in b, length).
/// Among equal-length runs the earliest in `a`, then earliest in `b`, wins.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // run_ending[j] = length of the common run ending at a[i], b[j - 1]
    let mut run_ending = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = run_ending[j + 1];
            run_ending[j + 1] = if ca == cb { diag + 1 } else { 0 };
            diag = up;
            let len = run_ending[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
    }
    best
}

/// Find the best-matching old URL for a new URL.
///
/// Both sides are normalized before scoring, but the returned candidate is the
/// original form from the corpus. The maximum score wins; ties keep the first
/// candidate seen (strictly-greater updates only), so corpus order matters.
/// Returns None when no candidate scores above [`MATCH_THRESHOLD`].
pub fn find_best_match<'a>(new_url: &str, old_urls: &'a [String]) -> Option<(&'a str, f64)> {
    let normalized_new = normalize_url(new_url);

    let mut best_match: Option<&str> = None;
    let mut best_score = 0.0_f64;

    for old_url in old_urls {
        let score = similarity_ratio(&normalized_new, &normalize_url(old_url));
        if score > best_score {
            best_score = score;
            best_match = Some(old_url);
        }
    }

    if best_score > MATCH_THRESHOLD {
        best_match.map(|m| (m, best_score))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_similarity_ratio_identical() {
        assert_eq!(similarity_ratio("/products/shoes", "/products/shoes"), 1.0);
    }

    #[test]
    fn test_similarity_ratio_empty() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("", "/a"), 0.0);
        assert_eq!(similarity_ratio("/a", ""), 0.0);
    }

    #[test]
    fn test_similarity_ratio_known_value() {
        // Longest run "bcd" (3 chars), no flank matches: 2*3 / 8 = 0.75
        assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_similarity_ratio_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_ratio_counts_flank_runs() {
        // "ab" and "d" match around the unshared middle: 2*3 / 7
        let score = similarity_ratio("abcd", "abd");
        assert!((score - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_best_match_verbatim_scores_one() {
        let old = corpus(&["/products/shoes", "/about-us"]);
        let (m, score) = find_best_match("/about-us", &old).unwrap();
        assert_eq!(m, "/about-us");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_find_best_match_slash_and_case_insensitive() {
        let old = corpus(&["About-Us"]);
        let (m, score) = find_best_match("/about-us", &old).unwrap();
        // Original corpus form comes back, not the normalized one
        assert_eq!(m, "About-Us");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_find_best_match_close_candidate() {
        let old = corpus(&["/products/shoes", "/about-us"]);
        let (m, score) = find_best_match("/products/shoe", &old).unwrap();
        assert_eq!(m, "/products/shoes");
        assert!(score > MATCH_THRESHOLD);
    }

    #[test]
    fn test_find_best_match_below_threshold() {
        let old = corpus(&["/products/shoes", "/about-us"]);
        assert!(find_best_match("/contact", &old).is_none());
    }

    #[test]
    fn test_find_best_match_empty_corpus() {
        assert!(find_best_match("/anything", &[]).is_none());
    }

    #[test]
    fn test_find_best_match_tie_keeps_first() {
        // Both candidates normalize identically and score 1.0; the first in
        // corpus order must win.
        let old = corpus(&["/About-Us", "/about-us"]);
        let (m, _) = find_best_match("about-us", &old).unwrap();
        assert_eq!(m, "/About-Us");
    }

    #[test]
    fn test_returned_score_always_above_threshold() {
        let old = corpus(&["/products/shoes", "/about-us", "/blog/posts"]);
        for query in ["/products/shoe", "/about", "/blog/post", "/xyz"] {
            if let Some((_, score)) = find_best_match(query, &old) {
                assert!(score > MATCH_THRESHOLD);
            }
        }
    }
}
