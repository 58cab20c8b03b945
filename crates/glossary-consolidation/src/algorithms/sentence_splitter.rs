//! Split descriptions into candidate sentences for merging.

/// Split text on runs of `.`, `!` and `?`, trim each fragment, and keep only
/// fragments longer than `min_len` characters. Terminators are not kept.
pub fn split_sentences(text: &str, min_len: usize) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let text = "Records a design decision. Stored in the repository! Why was it made?";
        let sentences = split_sentences(text, 10);
        assert_eq!(
            sentences,
            vec![
                "Records a design decision",
                "Stored in the repository",
                "Why was it made"
            ]
        );
    }

    #[test]
    fn drops_short_fragments() {
        let sentences = split_sentences("Short. This one is long enough... Ok!", 10);
        assert_eq!(sentences, vec!["This one is long enough"]);
    }

    #[test]
    fn boundary_length_is_excluded() {
        // Exactly ten characters is not enough.
        assert!(split_sentences("abcdefghij.", 10).is_empty());
        assert_eq!(split_sentences("abcdefghijk.", 10).len(), 1);
    }

    #[test]
    fn handles_empty_string() {
        assert!(split_sentences("", 10).is_empty());
    }

    #[test]
    fn handles_no_punctuation() {
        let sentences = split_sentences("This has no ending punctuation", 10);
        assert_eq!(sentences.len(), 1);
    }
}
