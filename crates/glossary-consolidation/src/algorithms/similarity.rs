//! Word-overlap similarity between sentences.

use std::collections::HashSet;

/// Distinct whitespace-separated words of `text`.
pub fn word_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Shared-word count divided by the size of the larger word set.
/// Returns 0.0 when both texts are empty.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let a = word_set(a);
    let b = word_set(b);
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    let shared = a.intersection(&b).count();
    shared as f64 / larger as f64
}

/// A sentence is novel when its overlap with a known sentence is at most `threshold`.
pub fn is_novel(overlap: f64, threshold: f64) -> bool {
    overlap <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sentences_overlap_fully() {
        let s = "a record of a design decision";
        assert!((word_overlap(s, s) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_sentences_do_not_overlap() {
        assert_eq!(word_overlap("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn divides_by_larger_set() {
        // 2 shared words, larger set has 4 words.
        let overlap = word_overlap("one two", "one two three four");
        assert!((overlap - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_texts_return_zero() {
        assert_eq!(word_overlap("", ""), 0.0);
    }

    #[test]
    fn novelty_threshold_is_inclusive() {
        assert!(is_novel(0.6, 0.6));
        assert!(!is_novel(0.61, 0.6));
    }
}
