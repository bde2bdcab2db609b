//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::{CleanedCorpus, FilteredText, NormalizedText, SentenceSet};

/// Stage name constants, in execution order.
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_FILTER: &str = "script_filter";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_STOPWORDS: &str = "stopwords";

/// Monotonic clock for timing a single stage.
#[derive(Debug)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Per-stage metrics reported at each stage boundary.
#[derive(Debug, Clone)]
pub struct StageReport {
    duration: Duration,
    chars: Option<usize>,
    sentences: Option<usize>,
    tokens: Option<usize>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            chars: None,
            sentences: None,
            tokens: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn chars(&self) -> Option<usize> {
        self.chars
    }

    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }
}

/// Builder for [`StageReport`] with optional metric fields.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    pub fn chars(mut self, chars: usize) -> Self {
        self.report.chars = Some(chars);
        self
    }

    pub fn sentences(mut self, sentences: usize) -> Self {
        self.report.sentences = Some(sentences);
        self
    }

    pub fn tokens(mut self, tokens: usize) -> Self {
        self.report.tokens = Some(tokens);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods have empty default bodies, so implementors override only
/// what they need. Pass [`NoopObserver`] for zero-overhead execution.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    fn on_normalized(&mut self, _text: &NormalizedText) {}
    fn on_filtered(&mut self, _text: &FilteredText) {}
    fn on_sentences(&mut self, _sentences: &SentenceSet) {}
    fn on_cleaned(&mut self, _corpus: &CleanedCorpus) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
