//! Sindhi corpus preprocessing.
//!
//! A single-pass batch pipeline that turns raw Sindhi text into a clean,
//! sentence-segmented, stopword-free corpus suitable for downstream NLP
//! work (tokenization, embeddings, frequency analysis).
//!
//! The pipeline runs four ordered stages over in-memory text:
//!
//! 1. **Normalize** — Unicode NFC canonical composition, so visually
//!    identical letterforms compare equal and cursive joins stay intact.
//! 2. **Script filter** — delete every code point outside the Arabic-script
//!    allow-list (plus digits, whitespace, and terminal punctuation).
//! 3. **Segment** — split on sentence-terminal punctuation (۔ ؟) and
//!    whitespace-tokenize each sentence.
//! 4. **Stopword removal** — drop exact-match stopword tokens, preserving
//!    the order of survivors.
//!
//! # Quick start
//!
//! ```
//! use sindhi_preprocess::{preprocess, PreprocessConfig, StopwordSet};
//!
//! let stopwords = StopwordSet::from_words(["۽", "جي"]);
//! let cfg = PreprocessConfig::default();
//! let corpus = preprocess("سلام دنيا۔ هي ٽيسٽ آهي؟", &stopwords, &cfg);
//! assert_eq!(corpus.len(), 2);
//! ```

pub mod analysis;
pub mod corpus;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use crate::error::{PreprocessError, Result};
pub use crate::nlp::stopwords::StopwordSet;
pub use crate::pipeline::artifacts::CleanedCorpus;
pub use crate::pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use crate::pipeline::runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use crate::types::{EmptyLinePolicy, PreprocessConfig, Sentence};

/// Run the standard pipeline over `raw` text with a [`NoopObserver`].
///
/// Convenience wrapper around [`Pipeline::run`] for callers that don't need
/// custom stages or stage-boundary callbacks.
pub fn preprocess(raw: &str, stopwords: &StopwordSet, cfg: &PreprocessConfig) -> CleanedCorpus {
    StandardPipeline::standard().run(raw, stopwords, cfg, &mut NoopObserver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_end_to_end() {
        let stopwords = StopwordSet::empty();
        let cfg = PreprocessConfig::default();
        let corpus = preprocess("سلام دنيا۔ هي ٽيسٽ آهي؟", &stopwords, &cfg);

        let lines: Vec<String> = corpus.lines().collect();
        assert_eq!(lines, vec!["سلام دنيا", "هي ٽيسٽ آهي"]);
    }

    #[test]
    fn test_preprocess_empty_input() {
        let stopwords = StopwordSet::empty();
        let cfg = PreprocessConfig::default();
        let corpus = preprocess("", &stopwords, &cfg);
        assert!(corpus.is_empty());
    }
}
