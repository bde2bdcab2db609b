//! Core value types shared across pipeline stages.

use serde::{Deserialize, Serialize};

/// An ordered sequence of whitespace-delimited tokens.
///
/// Produced by the segmenter; possibly shortened by stopword removal. A
/// sentence with zero tokens is a valid degenerate value — whether it
/// reaches the output is decided by [`EmptyLinePolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Build a sentence from string slices (mostly useful in tests).
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            tokens: tokens.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-join the tokens into the output-line form.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

/// What to do with a sentence whose tokens were all removed as stopwords.
///
/// Segmentation-level empty spans (e.g. "۔۔") are always dropped; this
/// policy only governs sentences emptied *after* stopword removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyLinePolicy {
    /// Skip the sentence entirely — no blank line in the output.
    #[default]
    Skip,
    /// Emit a blank output line in the sentence's position.
    Emit,
}

/// Pipeline configuration.
///
/// All fields have defaults, so `PreprocessConfig::default()` gives the
/// standard single-threaded, skip-empty behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Policy for sentences emptied by stopword removal.
    #[serde(default)]
    pub empty_line_policy: EmptyLinePolicy,

    /// Filter stopwords across sentences in parallel. Output order is
    /// unaffected — sentences are independent units of work.
    #[serde(default)]
    pub parallel: bool,

    /// Extra sentence-boundary characters recognized by the segmenter, on
    /// top of the built-in ۔ ؟ and !.
    #[serde(default)]
    pub extra_boundaries: Vec<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_join() {
        let s = Sentence::from_tokens(["مان", "تون"]);
        assert_eq!(s.join(), "مان تون");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_empty_sentence() {
        let s = Sentence::new(vec![]);
        assert!(s.is_empty());
        assert_eq!(s.join(), "");
    }

    #[test]
    fn test_config_defaults() {
        let cfg = PreprocessConfig::default();
        assert_eq!(cfg.empty_line_policy, EmptyLinePolicy::Skip);
        assert!(!cfg.parallel);
        assert!(cfg.extra_boundaries.is_empty());
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let cfg: PreprocessConfig =
            serde_json::from_str(r#"{ "empty_line_policy": "emit", "parallel": true }"#).unwrap();
        assert_eq!(cfg.empty_line_policy, EmptyLinePolicy::Emit);
        assert!(cfg.parallel);
    }
}
