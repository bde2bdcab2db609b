//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the provided defaults ([`NfcNormalizer`],
//! [`ArabicScriptFilter`], [`TerminalPunctSegmenter`], [`ExactMatchRemover`])
//! are zero-sized and add no runtime cost.

use rayon::prelude::*;

use crate::nlp::stopwords::StopwordSet;
use crate::nlp::{normalize, script_filter, segmenter};
use crate::pipeline::artifacts::{FilteredText, NormalizedText, SentenceSet};
use crate::types::PreprocessConfig;

// ============================================================================
// Normalizer — canonical Unicode composition (stage 0)
// ============================================================================

/// Unicode normalization stage.
///
/// # Contract
///
/// - **Input**: any valid decoded text, composed or decomposed, mixed
///   scripts, stray controls.
/// - **Output**: text where every character with a canonical composed form
///   is represented in that form.
/// - **Idempotent**: normalizing twice equals normalizing once.
/// - Pure — no side effects, no error conditions.
pub trait Normalizer {
    fn normalize(&self, raw: &str, cfg: &PreprocessConfig) -> NormalizedText;
}

/// NFC normalizer — the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NfcNormalizer;

impl Normalizer for NfcNormalizer {
    fn normalize(&self, raw: &str, _cfg: &PreprocessConfig) -> NormalizedText {
        NormalizedText::new(normalize::nfc(raw))
    }
}

// ============================================================================
// ScriptFilter — allow-list character filtering (stage 1)
// ============================================================================

/// Character filtering stage.
///
/// # Contract
///
/// - Total over any input; never errors. Unexpected characters are handled
///   here as deletions, not raised upward.
/// - Idempotent and order-preserving over retained characters.
pub trait ScriptFilter {
    fn filter(&self, text: &NormalizedText, cfg: &PreprocessConfig) -> FilteredText;
}

/// Arabic-script allow-list filter — the default.
///
/// Delegates to [`script_filter::filter`]; see that module for the exact
/// code-point ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicScriptFilter;

impl ScriptFilter for ArabicScriptFilter {
    fn filter(&self, text: &NormalizedText, _cfg: &PreprocessConfig) -> FilteredText {
        FilteredText::new(script_filter::filter(text.as_str()))
    }
}

// ============================================================================
// Segmenter — sentence boundary detection (stage 2)
// ============================================================================

/// Sentence segmentation stage.
///
/// # Contract
///
/// - Boundary punctuation is discarded from sentence content.
/// - Empty spans are dropped, so the output never contains a zero-token
///   sentence at this stage.
pub trait Segmenter {
    fn segment(&self, text: &FilteredText, cfg: &PreprocessConfig) -> SentenceSet;
}

/// Terminal-punctuation segmenter — the default.
///
/// Splits on ۔ ؟ ! plus any `cfg.extra_boundaries`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPunctSegmenter;

impl Segmenter for TerminalPunctSegmenter {
    fn segment(&self, text: &FilteredText, cfg: &PreprocessConfig) -> SentenceSet {
        SentenceSet::new(segmenter::split_sentences(
            text.as_str(),
            &cfg.extra_boundaries,
        ))
    }
}

// ============================================================================
// StopwordRemover — per-sentence token filtering (stage 3)
// ============================================================================

/// Stopword removal stage.
///
/// # Contract
///
/// - Exact-string membership only; kept tokens preserve relative order.
/// - May produce zero-token sentences; the runner applies the configured
///   [`crate::types::EmptyLinePolicy`] afterwards.
pub trait StopwordRemover {
    fn remove(
        &self,
        sentences: SentenceSet,
        stopwords: &StopwordSet,
        cfg: &PreprocessConfig,
    ) -> SentenceSet;
}

/// Set-lookup remover — the default.
///
/// With `cfg.parallel` set, sentences are filtered on the rayon pool;
/// `par_iter().map().collect()` preserves input order, so no index tagging
/// or re-sorting is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchRemover;

impl StopwordRemover for ExactMatchRemover {
    fn remove(
        &self,
        sentences: SentenceSet,
        stopwords: &StopwordSet,
        cfg: &PreprocessConfig,
    ) -> SentenceSet {
        let sentences = sentences.into_inner();
        let filtered = if cfg.parallel {
            sentences
                .par_iter()
                .map(|s| stopwords.filter_sentence(s))
                .collect()
        } else {
            sentences
                .iter()
                .map(|s| stopwords.filter_sentence(s))
                .collect()
        };
        SentenceSet::new(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn cfg() -> PreprocessConfig {
        PreprocessConfig::default()
    }

    #[test]
    fn test_nfc_normalizer_is_idempotent() {
        let n = NfcNormalizer;
        let once = n.normalize("\u{0627}\u{0653}سلام", &cfg());
        let twice = n.normalize(once.as_str(), &cfg());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_script_filter_stage_deletes_latin() {
        let f = ArabicScriptFilter;
        let out = f.filter(&NormalizedText::new("abc سلام".into()), &cfg());
        assert_eq!(out.as_str(), " سلام");
    }

    #[test]
    fn test_segmenter_stage_uses_extra_boundaries() {
        let s = TerminalPunctSegmenter;
        let mut config = cfg();
        config.extra_boundaries = vec!['،'];
        let out = s.segment(&FilteredText::new("سلام، دنيا".into()), &config);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_remover_sequential_and_parallel_agree() {
        let set = StopwordSet::from_words(["۽", "جي"]);
        let sentences = SentenceSet::new(vec![
            Sentence::from_tokens(["مان", "۽", "تون", "جي"]),
            Sentence::from_tokens(["۽"]),
            Sentence::from_tokens(["سلام", "دنيا"]),
        ]);

        let seq = ExactMatchRemover.remove(sentences.clone(), &set, &cfg());

        let mut par_cfg = cfg();
        par_cfg.parallel = true;
        let par = ExactMatchRemover.remove(sentences, &set, &par_cfg);

        assert_eq!(seq, par);
        assert_eq!(seq.sentences()[0], Sentence::from_tokens(["مان", "تون"]));
        assert!(seq.sentences()[1].is_empty());
    }

    #[test]
    fn test_remover_disjoint_set_keeps_all_tokens() {
        let set = StopwordSet::from_words(["ناهي"]);
        let sentences = SentenceSet::new(vec![Sentence::from_tokens(["سلام", "دنيا"])]);
        let out = ExactMatchRemover.remove(sentences, &set, &cfg());
        assert_eq!(out.num_tokens(), 2);
    }
}
