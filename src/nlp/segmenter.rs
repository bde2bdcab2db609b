//! Sentence segmentation on script-specific terminal punctuation.
//!
//! Sindhi sentences end with "۔" or "؟" (and occasionally "!", which the
//! script filter deletes before the composed pipeline reaches this stage,
//! but which is honored when the segmenter is used standalone). Each
//! boundary mark is discarded; the span between boundaries becomes one
//! sentence, whitespace-collapsed and split into tokens. Splitting on
//! whitespace only — never inside a word — keeps joined glyph runs intact.

use crate::nlp::script_filter::{ARABIC_FULL_STOP, ARABIC_QUESTION_MARK};
use crate::types::Sentence;

/// Built-in sentence-boundary characters.
pub const SENTENCE_BOUNDARIES: [char; 3] = [ARABIC_FULL_STOP, ARABIC_QUESTION_MARK, '!'];

/// Returns `true` if `c` terminates a sentence.
#[inline]
pub fn is_boundary(c: char) -> bool {
    SENTENCE_BOUNDARIES.contains(&c)
}

/// Split `text` into sentences at the built-in boundaries plus `extra`.
///
/// Empty spans (consecutive boundaries, boundary at start or end, spans of
/// pure whitespace) are dropped. Within each span, any run of whitespace
/// collapses to a single token separator.
pub fn split_sentences(text: &str, extra: &[char]) -> Vec<Sentence> {
    text.split(|c: char| is_boundary(c) || extra.contains(&c))
        .filter_map(|span| {
            let tokens: Vec<String> = span.split_whitespace().map(str::to_string).collect();
            if tokens.is_empty() {
                None
            } else {
                Some(Sentence::new(tokens))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Sentence> {
        split_sentences(text, &[])
    }

    #[test]
    fn test_two_sentences() {
        let sentences = split("سلام۔ تون ڪيئن آهين؟");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], Sentence::from_tokens(["سلام"]));
        assert_eq!(sentences[1], Sentence::from_tokens(["تون", "ڪيئن", "آهين"]));
    }

    #[test]
    fn test_no_boundary_is_one_sentence() {
        let sentences = split("سلام دنيا");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], Sentence::from_tokens(["سلام", "دنيا"]));
    }

    #[test]
    fn test_consecutive_boundaries_drop_empty_spans() {
        let sentences = split("سلام۔۔دنيا؟");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], Sentence::from_tokens(["سلام"]));
        assert_eq!(sentences[1], Sentence::from_tokens(["دنيا"]));
    }

    #[test]
    fn test_boundary_at_start_and_end() {
        let sentences = split("۔سلام۔");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_exclamation_mark_is_boundary() {
        let sentences = split("سلام! دنيا");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let sentences = split("سلام  \n\t دنيا۔");
        assert_eq!(sentences[0], Sentence::from_tokens(["سلام", "دنيا"]));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(split("  \n \t ").is_empty());
        assert!(split("").is_empty());
    }

    #[test]
    fn test_extra_boundaries() {
        let sentences = split_sentences("سلام، دنيا", &['،']);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_near_round_trip() {
        // Rejoining sentence spans with boundary marks reconstructs the
        // input up to whitespace normalization.
        let input = "سلام دنيا۔ هي ٽيسٽ آهي؟";
        let sentences = split(input);
        let rejoined = format!("{}۔ {}؟", sentences[0].join(), sentences[1].join());
        let normalized: String = input.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, normalized);
    }

    #[test]
    fn test_sentence_count_matches_boundaries() {
        // 3 boundaries, no empty spans, trailing span: 4 sentences.
        let sentences = split("هڪ۔ ٻه؟ ٽي۔ چار");
        assert_eq!(sentences.len(), 4);
    }
}
