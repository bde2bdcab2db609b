//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler monomorphizes
//! each combination into a unique concrete type. The zero-sized default
//! stages ([`NfcNormalizer`], [`ArabicScriptFilter`],
//! [`TerminalPunctSegmenter`], [`ExactMatchRemover`]) add zero bytes and
//! zero runtime cost.

use tracing::{debug, warn};

use crate::nlp::stopwords::StopwordSet;
use crate::pipeline::artifacts::CleanedCorpus;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FILTER, STAGE_NORMALIZE,
    STAGE_SEGMENT, STAGE_STOPWORDS,
};
use crate::pipeline::traits::{
    ArabicScriptFilter, ExactMatchRemover, NfcNormalizer, Normalizer, ScriptFilter, Segmenter,
    StopwordRemover, TerminalPunctSegmenter,
};
use crate::types::{EmptyLinePolicy, PreprocessConfig};

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// Trait bounds live on the `impl` block, so the struct itself is
/// unconditionally constructible (useful for builders).
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `N`   | [`Normalizer`] | [`NfcNormalizer`] |
/// | `F`   | [`ScriptFilter`] | [`ArabicScriptFilter`] |
/// | `S`   | [`Segmenter`] | [`TerminalPunctSegmenter`] |
/// | `R`   | [`StopwordRemover`] | [`ExactMatchRemover`] |
#[derive(Debug, Clone)]
pub struct Pipeline<N, F, S, R> {
    pub normalizer: N,
    pub script_filter: F,
    pub segmenter: S,
    pub stopword_remover: R,
}

/// Type alias for the default preprocessing pipeline.
pub type StandardPipeline =
    Pipeline<NfcNormalizer, ArabicScriptFilter, TerminalPunctSegmenter, ExactMatchRemover>;

impl StandardPipeline {
    /// Build the standard Sindhi preprocessing pipeline.
    ///
    /// All stages use their zero-sized defaults:
    /// - NFC canonical composition
    /// - Arabic-script allow-list filtering
    /// - Terminal-punctuation segmentation (۔ ؟ !)
    /// - Exact-match stopword removal
    pub fn standard() -> Self {
        Pipeline {
            normalizer: NfcNormalizer,
            script_filter: ArabicScriptFilter,
            segmenter: TerminalPunctSegmenter,
            stopword_remover: ExactMatchRemover,
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<N, F, S, R> Pipeline<N, F, S, R>
where
    N: Normalizer,
    F: ScriptFilter,
    S: Segmenter,
    R: StopwordRemover,
{
    /// Execute the pipeline over `raw` text, producing a [`CleanedCorpus`].
    ///
    /// Stages run in order:
    /// 1. Normalize (NFC)
    /// 2. Script-filter
    /// 3. Segment into sentences
    /// 4. Remove stopwords
    ///
    /// Afterwards the configured [`EmptyLinePolicy`] is applied to sentences
    /// emptied by stopword removal. A corpus that ends up with zero
    /// sentences is valid output; the condition is surfaced with a warning
    /// so it is not silently identical to success on nonempty input.
    pub fn run(
        &self,
        raw: &str,
        stopwords: &StopwordSet,
        cfg: &PreprocessConfig,
        observer: &mut impl PipelineObserver,
    ) -> CleanedCorpus {
        // Stage 0: Normalize
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalized = self.normalizer.normalize(raw, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .chars(normalized.as_str().chars().count())
            .build();
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_normalized(&normalized);

        // Stage 1: Script filter
        observer.on_stage_start(STAGE_FILTER);
        let clock = StageClock::start();
        let filtered = self.script_filter.filter(&normalized, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .chars(filtered.as_str().chars().count())
            .build();
        observer.on_stage_end(STAGE_FILTER, &report);
        observer.on_filtered(&filtered);

        // Stage 2: Segment
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segmenter.segment(&filtered, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .tokens(sentences.num_tokens())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);
        debug!(sentences = sentences.len(), tokens = sentences.num_tokens(), "segmented corpus");

        // Stage 3: Stopword removal
        observer.on_stage_start(STAGE_STOPWORDS);
        let clock = StageClock::start();
        let filtered_sentences = self.stopword_remover.remove(sentences, stopwords, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(filtered_sentences.len())
            .tokens(filtered_sentences.num_tokens())
            .build();
        observer.on_stage_end(STAGE_STOPWORDS, &report);
        observer.on_sentences(&filtered_sentences);

        let corpus = apply_empty_line_policy(filtered_sentences.into_inner(), cfg);
        if corpus.is_empty() {
            warn!("corpus produced zero sentences after filtering");
        }
        observer.on_cleaned(&corpus);
        corpus
    }
}

/// Apply the configured policy to sentences emptied by stopword removal.
fn apply_empty_line_policy(
    sentences: Vec<crate::types::Sentence>,
    cfg: &PreprocessConfig,
) -> CleanedCorpus {
    match cfg.empty_line_policy {
        EmptyLinePolicy::Emit => CleanedCorpus::new(sentences),
        EmptyLinePolicy::Skip => {
            CleanedCorpus::new(sentences.into_iter().filter(|s| !s.is_empty()).collect())
        }
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the standard configuration and allows overriding individual
/// stages.
///
/// ```
/// # use sindhi_preprocess::pipeline::runner::PipelineBuilder;
/// # use sindhi_preprocess::pipeline::traits::TerminalPunctSegmenter;
/// let pipeline = PipelineBuilder::new()
///     .segmenter(TerminalPunctSegmenter)
///     .build();
/// ```
pub struct PipelineBuilder<
    N = NfcNormalizer,
    F = ArabicScriptFilter,
    S = TerminalPunctSegmenter,
    R = ExactMatchRemover,
> {
    normalizer: N,
    script_filter: F,
    segmenter: S,
    stopword_remover: R,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            normalizer: NfcNormalizer,
            script_filter: ArabicScriptFilter,
            segmenter: TerminalPunctSegmenter,
            stopword_remover: ExactMatchRemover,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, F, S, R> PipelineBuilder<N, F, S, R> {
    /// Override the normalizer stage.
    pub fn normalizer<N2: Normalizer>(self, n: N2) -> PipelineBuilder<N2, F, S, R> {
        PipelineBuilder {
            normalizer: n,
            script_filter: self.script_filter,
            segmenter: self.segmenter,
            stopword_remover: self.stopword_remover,
        }
    }

    /// Override the script filter stage.
    pub fn script_filter<F2: ScriptFilter>(self, f: F2) -> PipelineBuilder<N, F2, S, R> {
        PipelineBuilder {
            normalizer: self.normalizer,
            script_filter: f,
            segmenter: self.segmenter,
            stopword_remover: self.stopword_remover,
        }
    }

    /// Override the segmenter stage.
    pub fn segmenter<S2: Segmenter>(self, s: S2) -> PipelineBuilder<N, F, S2, R> {
        PipelineBuilder {
            normalizer: self.normalizer,
            script_filter: self.script_filter,
            segmenter: s,
            stopword_remover: self.stopword_remover,
        }
    }

    /// Override the stopword remover stage.
    pub fn stopword_remover<R2: StopwordRemover>(self, r: R2) -> PipelineBuilder<N, F, S, R2> {
        PipelineBuilder {
            normalizer: self.normalizer,
            script_filter: self.script_filter,
            segmenter: self.segmenter,
            stopword_remover: r,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<N, F, S, R> {
        Pipeline {
            normalizer: self.normalizer,
            script_filter: self.script_filter,
            segmenter: self.segmenter,
            stopword_remover: self.stopword_remover,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
