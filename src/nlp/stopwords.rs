//! Stopword filtering
//!
//! This module provides set-backed stopword filtering for Sindhi text,
//! loaded from a one-word-per-line file or built from an in-memory list.
//!
//! Entries are NFC-normalized and script-filtered exactly like corpus
//! tokens at construction time. Membership tests compare strings in the
//! same normalization form on both sides; a decomposed entry in the
//! stopword file still matches its composed corpus token. Arabic-script
//! languages have no case distinction, so no case folding is applied.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::nlp::{normalize, script_filter};
use crate::types::Sentence;

/// A set of stopwords with O(1) amortized membership tests.
///
/// Read-only after construction, so it is safely shared across any number
/// of concurrent sentence-filtering operations without locking.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from an in-memory word list.
    ///
    /// Each entry is normalized and script-filtered; blank entries and
    /// duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| canonicalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Load a stopword set from a file, one word per line.
    ///
    /// Blank lines and duplicate entries are tolerated.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = crate::corpus::read_text(path)?;
        Ok(Self::from_words(text.lines()))
    }

    /// Check exact-match membership. No partial or substring matching.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove stopword tokens from `sentence`, preserving the relative
    /// order of kept tokens.
    pub fn filter_sentence(&self, sentence: &Sentence) -> Sentence {
        Sentence::new(
            sentence
                .tokens()
                .iter()
                .filter(|t| !self.contains(t))
                .cloned()
                .collect(),
        )
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Apply the same normalization + filtering as corpus text; `None` for
/// entries that come out empty.
fn canonicalize(word: &str) -> Option<String> {
    let cleaned = script_filter::filter(&normalize::nfc(word));
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
