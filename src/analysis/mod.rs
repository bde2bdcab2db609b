//! Corpus statistics and word-frequency analysis.
//!
//! Operates on a [`CleanedCorpus`]: sentence/token counts, averages, and a
//! frequency table with `most_common`. Arabic-script languages have no case
//! distinction, so tokens are counted as-is.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::pipeline::artifacts::CleanedCorpus;

/// Summary statistics over a cleaned corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub sentences: usize,
    pub tokens: usize,
    pub unique_tokens: usize,
    pub avg_tokens_per_sentence: f64,
    /// Mean token length in characters (code points, not bytes).
    pub avg_word_length: f64,
}

impl CorpusStats {
    pub fn compute(corpus: &CleanedCorpus) -> Self {
        let freq = FrequencyTable::from_corpus(corpus);
        let sentences = corpus.len();
        let tokens: usize = corpus.sentences().iter().map(|s| s.len()).sum();
        let total_chars: usize = corpus
            .sentences()
            .iter()
            .flat_map(|s| s.tokens())
            .map(|t| t.chars().count())
            .sum();

        Self {
            sentences,
            tokens,
            unique_tokens: freq.len(),
            avg_tokens_per_sentence: tokens as f64 / sentences.max(1) as f64,
            avg_word_length: total_chars as f64 / tokens.max(1) as f64,
        }
    }
}

/// Token frequency counts over a cleaned corpus.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_corpus(corpus: &CleanedCorpus) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in corpus.sentences() {
            for token in sentence.tokens() {
                *counts.entry(token.clone()).or_default() += 1;
            }
        }
        Self { counts }
    }

    /// Count for a single token (0 if absent).
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent tokens, descending by count. Ties break by
    /// token so the ordering is deterministic.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(t, &c)| (t.clone(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}
