//! First-class pipeline artifacts.
//!
//! Each type represents a typed intermediate result flowing between pipeline
//! stages. The flow is strictly linear — raw text → [`NormalizedText`] →
//! [`FilteredText`] → [`SentenceSet`] → [`CleanedCorpus`] — and each stage
//! owns its output; no stage mutates a structure another stage still reads.

use crate::types::Sentence;

/// NFC-normalized text produced by the normalizer stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

/// Script-filtered text: only allow-listed code points remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredText {
    text: String,
}

impl FilteredText {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

/// Ordered sentences produced by the segmenter and shortened by stopword
/// removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceSet {
    sentences: Vec<Sentence>,
}

impl SentenceSet {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn into_inner(self) -> Vec<Sentence> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count across all sentences.
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

/// Final ordered corpus — the output stability boundary.
///
/// Created once by a pipeline run and not mutated after; persisted one
/// sentence per line via [`crate::corpus::write_cleaned`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedCorpus {
    sentences: Vec<Sentence>,
}

impl CleanedCorpus {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over output lines (space-joined tokens, no newlines).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.sentences.iter().map(Sentence::join)
    }

    /// Render the on-disk form: one sentence per line, each line terminated
    /// by a newline. An empty corpus renders as an empty string.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
